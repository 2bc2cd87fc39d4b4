//! QMA7981 register map. The driver only exercises the identity, power
//! control and acceleration registers; the rest of the map is listed for
//! completeness.
#![allow(dead_code)]

pub const WHO_AM_I: u8 = 0x00;

pub const ACCEL_XOUT_L: u8 = 0x01;
pub const ACCEL_XOUT_H: u8 = 0x02;
pub const ACCEL_YOUT_L: u8 = 0x03;
pub const ACCEL_YOUT_H: u8 = 0x04;
pub const ACCEL_ZOUT_L: u8 = 0x05;
pub const ACCEL_ZOUT_H: u8 = 0x06;

pub const STEP_CNT_L: u8 = 0x07;
pub const INT_STAT0: u8 = 0x08;
pub const INT_STAT1: u8 = 0x09;
pub const INT_STAT2: u8 = 0x0A;
pub const INT_STAT3: u8 = 0x0B;
pub const FIFO_STATE: u8 = 0x0C;
pub const STEP_CNT_M: u8 = 0x0D;

pub const RANGE: u8 = 0x0E;
pub const BW_ODR: u8 = 0x10;
pub const POWER_CTL: u8 = 0x11;

pub const STEP_SAMPLE_CNT: u8 = 0x12;
pub const STEP_PRECISION: u8 = 0x13;
pub const STEP_TIME_LOW: u8 = 0x14;
pub const STEP_TIME_UP: u8 = 0x15;

pub const INTPIN_CFG: u8 = 0x20;
pub const INT_CFG: u8 = 0x21;

pub const OS_CUST_X: u8 = 0x27;
pub const OS_CUST_Y: u8 = 0x28;
pub const OS_CUST_Z: u8 = 0x29;
