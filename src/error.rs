use color_eyre::eyre::Result;

/// Installs color-eyre report and panic hooks.
///
/// Nothing is restored on failure: a glyph drawn before the error stays on
/// screen.
pub fn install_hooks() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()
}
