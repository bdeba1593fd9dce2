use soroban_sdk::{symbol_short, Symbol};

// Platform events
pub const INITIALIZED: Symbol = symbol_short!("init");
pub const FEE_UPDATED: Symbol = symbol_short!("fee_set");
pub const PAUSE_TOGGLED: Symbol = symbol_short!("paused");
pub const FEES_WITHDRAWN: Symbol = symbol_short!("fee_wdrw");
pub const THRESHOLD_UPDATED: Symbol = symbol_short!("thr_set");

// Campaign events
pub const CAMPAIGN_CREATED: Symbol = symbol_short!("camp_new");
pub const INVESTMENT_MADE: Symbol = symbol_short!("invest");
pub const CAMPAIGN_CLOSED: Symbol = symbol_short!("camp_cls");
pub const CAMPAIGN_FORCE_CLOSED: Symbol = symbol_short!("camp_emg");

// Milestone events
pub const MILESTONE_CREATED: Symbol = symbol_short!("m_create");
pub const MILESTONE_VOTED: Symbol = symbol_short!("m_vote");
pub const MILESTONE_COMPLETED: Symbol = symbol_short!("m_done");
pub const MILESTONE_FORCED: Symbol = symbol_short!("m_force");
pub const FUNDS_RELEASED: Symbol = symbol_short!("released");
