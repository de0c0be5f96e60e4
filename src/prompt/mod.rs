pub mod constructor;
