use embassy_usb::driver::EndpointError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    /// The host has not configured the interface yet (or has suspended it).
    Disabled,
    /// The report did not fit the endpoint.
    BufferOverflow,
}

impl From<EndpointError> for HidError {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::Disabled => HidError::Disabled,
            EndpointError::BufferOverflow => HidError::BufferOverflow,
        }
    }
}

/// Host side of the keyboard: something that can press and release a USB keycode.
#[allow(async_fn_in_trait)]
pub trait KeyboardReport {
    async fn press(&mut self, keycode: u8) -> Result<(), HidError>;
    async fn release(&mut self, keycode: u8) -> Result<(), HidError>;
    /// Lift every key and modifier the host thinks is down.
    async fn release_all(&mut self) -> Result<(), HidError>;
}

/// Send one key transition to the host.
///
/// A failed write is logged and dropped; losing a keystroke is better than stalling the reader.
/// Returns whether the host accepted it.
pub async fn emit<H: KeyboardReport>(hid: &mut H, keycode: u8, is_up: bool) -> bool {
    let result = if is_up {
        hid.release(keycode).await
    } else {
        hid.press(keycode).await
    };

    match result {
        Ok(()) => {
            crate::debug!(
                "keycode {:#x} {}",
                keycode,
                if is_up { "released" } else { "pressed" }
            );
            true
        }
        Err(err) => {
            crate::warn!("keycode {:#x} not sent: {:?}", keycode, err);
            false
        }
    }
}

/// Tell the host nothing is held any more. Failures are logged and dropped like [emit].
pub async fn emit_release_all<H: KeyboardReport>(hid: &mut H) -> bool {
    match hid.release_all().await {
        Ok(()) => {
            crate::debug!("all keycodes released");
            true
        }
        Err(err) => {
            crate::warn!("release all not sent: {:?}", err);
            false
        }
    }
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod test;
