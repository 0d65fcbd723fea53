//! Soft reload trigger

use super::CTRL_D;
use crate::error::Result;
use crate::serial::Transport;

/// Send Ctrl-D so the board re-runs `code.py`.
///
/// Nothing is read back here. Whether the reload happened only shows up
/// later as the output marker.
pub fn soft_reload<T: Transport + ?Sized>(transport: &mut T) -> Result<()> {
    transport.send_control(CTRL_D)?;
    log::info!("Soft reload requested");
    Ok(())
}
