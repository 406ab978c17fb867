//! Typed resource services
//!
//! One file per API resource family. Each service is a thin typed projection
//! over the generic pagination engine plus the handful of single-resource
//! calls the endpoint supports. Records are immutable snapshots of server
//! state; update calls always hand back a brand-new record.

mod commands;
mod fleets;
mod network_access_profiles;
mod networks;
mod sims;
mod sms_commands;
mod usage_records;

pub use commands::{Command, CommandService, Direction};
pub use fleets::{Fleet, FleetService};
pub use network_access_profiles::{
    NapNetwork, NetworkAccessProfile, NetworkAccessProfileService,
};
pub use networks::{Network, NetworkIdentifier, NetworkService};
pub use sims::{Sim, SimService, SimStatus};
pub use sms_commands::{SmsCommand, SmsCommandService};
pub use usage_records::{UsagePeriod, UsageRecord, UsageRecordService};
