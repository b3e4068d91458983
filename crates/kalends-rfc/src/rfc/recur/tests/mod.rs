//! Cross-module tests for recurrence rules.
