// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Fatigue Types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod config;
pub mod constants;
pub mod error;
pub mod state;
