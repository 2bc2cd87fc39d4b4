pub mod qma7981;
