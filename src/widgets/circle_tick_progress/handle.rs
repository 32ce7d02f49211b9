use async_channel::{Receiver, Sender, TryRecvError};

/// Sets the progress of a [`super::CircleTickProgress`] from any thread.
///
/// Values are posted to the main context that owns the widget and applied
/// there; the most recent value wins.
#[derive(Clone, Debug)]
pub struct ProgressHandle {
	sender: Sender<u32>,
}

impl ProgressHandle {
	pub(super) fn new(sender: Sender<u32>) -> Self {
		Self { sender }
	}

	pub fn set_progress(&self, percent: u32) {
		if let Err(error) = self.sender.try_send(percent) {
			log::debug!("Dropping progress {}: {}", percent, error);
		}
	}

	/// Whether the widget behind this handle is gone.
	pub fn is_closed(&self) -> bool {
		self.sender.is_closed()
	}
}

/// Closes the channel behind every handle created from `sender`.
pub(super) fn close(sender: &Sender<u32>) {
	if sender.close() {
		log::debug!("Progress channel closed");
	}
}

/// Waits for the next posted value and skips to the newest one queued behind
/// it. Returns `None` once the channel is closed and empty.
pub(super) async fn recv_latest(receiver: &Receiver<u32>) -> Option<u32> {
	let mut latest = receiver.recv().await.ok()?;
	loop {
		match receiver.try_recv() {
			Ok(percent) => latest = percent,
			Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Some(latest),
		}
	}
}
