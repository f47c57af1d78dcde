// UI Constants
pub const USER_LABEL: &str = "Kamu";
pub const BOT_LABEL: &str = "Bot";

/// Shown as the bot bubble when the backend answers without a usable reply.
pub const FALLBACK_REPLY: &str = "Terjadi kesalahan.";

// API Constants
pub const CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

// Transcript export
pub const TRANSCRIPT_FILE: &str = "chat_history.txt";
