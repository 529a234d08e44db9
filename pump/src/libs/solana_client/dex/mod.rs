pub mod pump_fun;
