//! Interrupt-safe handoff between the remote decoder and the rover loop.
//!
//! The decoder callback runs in an asynchronous context and must not touch
//! session state or hardware. It posts into a single-slot mailbox built on
//! `critical-section`; the loop drains the slot once per iteration. A newer
//! event overwrites one that has not been drained yet, except for decoder
//! sentinels, which never reach the slot.

use core::cell::Cell;

use critical_section::Mutex;

/// One decoded remote-control message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteEvent {
    /// Command code; negative values are decoder sentinels (repeat, error)
    pub code: i32,
    pub address: u16,
    pub control: u8,
}

impl RemoteEvent {
    pub const fn new(code: i32, address: u16, control: u8) -> Self {
        Self {
            code,
            address,
            control,
        }
    }

    /// Check if this is a decoder sentinel rather than a key press
    pub const fn is_sentinel(&self) -> bool {
        self.code < 0
    }
}

/// Remote-control decoder resource
pub trait RemoteDecoder {
    /// Release the decoder (stop its interrupt, free the pin)
    fn close(&mut self);
}

/// Single-slot, latest-wins event mailbox
pub struct EventSlot {
    inner: Mutex<Cell<Option<RemoteEvent>>>,
}

impl EventSlot {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Get a posting handle for the decoder callback
    pub const fn sender(&self) -> EventSender<'_> {
        EventSender { slot: self }
    }

    /// Store `event`, replacing any event not yet taken.
    ///
    /// Sentinels (negative codes such as the repeat marker) are dropped and
    /// leave the pending event in place.
    pub fn post(&self, event: RemoteEvent) {
        if event.is_sentinel() {
            return;
        }
        critical_section::with(|cs| self.inner.borrow(cs).set(Some(event)));
    }

    /// Take the pending event, leaving the slot empty
    pub fn take(&self) -> Option<RemoteEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }
}

impl Default for EventSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle for an [`EventSlot`].
///
/// This is a lightweight reference that can be copied into callbacks.
#[derive(Clone, Copy)]
pub struct EventSender<'a> {
    slot: &'a EventSlot,
}

impl EventSender<'_> {
    /// Post a decoded message; negative codes are ignored
    pub fn post(&self, code: i32, address: u16, control: u8) {
        self.slot.post(RemoteEvent::new(code, address, control));
    }
}

/// External request to stop the rover loop
pub struct ShutdownSignal {
    requested: Mutex<Cell<bool>>,
}

impl ShutdownSignal {
    pub const fn new() -> Self {
        Self {
            requested: Mutex::new(Cell::new(false)),
        }
    }

    pub fn request(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(true));
    }

    pub fn is_requested(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).get())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
