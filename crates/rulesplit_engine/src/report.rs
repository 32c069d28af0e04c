use rulesplit_core::{RunContext, StatusEvent};
use rulesplit_logging::{rules_error, rules_info, rules_warn};

/// Mirrors a status event to the log and appends it to the run context.
pub(crate) fn report(ctx: &mut RunContext, event: StatusEvent) {
    match &event {
        StatusEvent::Skipped { .. } => rules_warn!("{}", event),
        e if e.is_error() => rules_error!("{}", event),
        _ => rules_info!("{}", event),
    }
    ctx.report(event);
}
