//! Shared UI icons and emojis.
//!
//! Each icon carries an ASCII fallback for terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR] ");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "* ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "[SKIP] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

// Installer indicators
pub static WRENCH: Emoji<'_, '_> = Emoji("🔧 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
pub static BACKUP: Emoji<'_, '_> = Emoji("💾 ", "[BAK] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
pub static TRASH: Emoji<'_, '_> = Emoji("🗑️  ", "[DEL] ");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "-> ");
