use derive_more::Display;
use derive_more::From;

pub mod time;

pub use time::Time;

use crate::utilities::CopyStr;

/// External identifier of a package as it appears in the input ("PKG1").
pub type PackageId = CopyStr<16>;

/// Offer codes are short fixed-size strings ("OFR001").
pub type OfferCode = CopyStr<8>;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "veh{}", _0)]
pub struct VehicleIdx(pub u16);

pub type Kg = f64;
pub type Km = f64;
pub type KmPerHour = f64;
pub type Cost = u64;
pub type Percent = u8;
pub type VehicleCount = u16;
