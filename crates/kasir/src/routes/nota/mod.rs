//! Riwayat Nota (invoice history) handlers.

pub mod cetak;
pub mod detail;
pub mod list;
pub mod types;
pub mod whatsapp;
