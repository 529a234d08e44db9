pub mod curve_benchmark;
