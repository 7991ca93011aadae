//! Unit type ids referenced by the built-in Terran rules.

use crate::UnitTypeId;

pub const TERRAN_COMMAND_CENTER: UnitTypeId = UnitTypeId(18);
pub const TERRAN_BARRACKS:       UnitTypeId = UnitTypeId(21);
pub const TERRAN_SCV:            UnitTypeId = UnitTypeId(45);
