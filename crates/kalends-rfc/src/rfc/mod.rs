pub mod recur;
