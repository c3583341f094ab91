use super::AppContext;
use crate::output::{print_state, OutputFormat, ThemeState};
use gdbus_ops::read_color_scheme;

/// Print the current color scheme once.
pub async fn query(ctx: &AppContext, format: OutputFormat) -> anyhow::Result<()> {
    let runner = ctx.command_runner();
    let scheme = read_color_scheme(&runner, ctx.config.query_timeout_secs).await?;

    print_state(&ThemeState::from(scheme), format);
    Ok(())
}
