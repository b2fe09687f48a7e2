mod cc_cooldown;
mod cc_status;
mod cc_subscription;
mod cc_timestamp;
mod forum_thread;
