//! Alert subscription fixtures.

use entity::cc_alert_chans;

/// Default guild id.
pub const DEFAULT_SERVER_ID: &str = "1";

/// Default channel id.
pub const DEFAULT_CHANNEL_ID: &str = "100";

/// Default tier.
pub const DEFAULT_TIER: &str = "OU";

/// Default generation id.
pub const DEFAULT_GEN: &str = "sv";

/// Default stage filter.
pub const DEFAULT_STAGE: &str = "all";

/// Creates a subscription entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - server_id: `"1"`, channel_id: `"100"`
/// - tier: `"OU"`, gen: `"sv"`, stage: `"all"`
/// - role: `None`, cooldown: `0`, prefix: `None`
pub fn entity() -> cc_alert_chans::Model {
    cc_alert_chans::Model {
        id: 1,
        server_id: DEFAULT_SERVER_ID.to_string(),
        channel_id: DEFAULT_CHANNEL_ID.to_string(),
        tier: DEFAULT_TIER.to_string(),
        role: None,
        gen: DEFAULT_GEN.to_string(),
        stage: DEFAULT_STAGE.to_string(),
        cooldown: 0,
        prefix: None,
    }
}
