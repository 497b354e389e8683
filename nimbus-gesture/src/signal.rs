//! The gesture control signal and the cell that shares it across loops.

use std::sync::atomic::{AtomicU64, Ordering};

/// Normalized gesture reading for one detection cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSignal {
    /// Normalized gesture distance in 0-1.
    pub distance: f32,
    /// Whether any hand was visible this cycle.
    pub active: bool,
}

impl ControlSignal {
    /// The signal consumers see before the first detection cycle lands:
    /// inactive, mid-range distance.
    pub const IDLE: ControlSignal = ControlSignal {
        distance: 0.5,
        active: false,
    };

    pub fn new(distance: f32, active: bool) -> Self {
        Self { distance, active }
    }
}

impl Default for ControlSignal {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Single-slot, most-recent-value cell for the control signal.
///
/// The detection loop publishes, the render loop snapshots; neither blocks
/// the other. Both fields are packed into one atomic word so a snapshot
/// never observes a distance from one cycle paired with the active flag of
/// another. There is no queue: a fresher reading always replaces a stale
/// one.
#[derive(Debug)]
pub struct SignalSlot {
    packed: AtomicU64,
}

impl SignalSlot {
    /// Create a slot seeded with [`ControlSignal::IDLE`].
    pub fn new() -> Self {
        Self {
            packed: AtomicU64::new(pack(ControlSignal::IDLE)),
        }
    }

    /// Overwrite the slot with this cycle's signal.
    pub fn publish(&self, signal: ControlSignal) {
        self.packed.store(pack(signal), Ordering::Relaxed);
    }

    /// Non-blocking read of the most recently published signal.
    pub fn snapshot(&self) -> ControlSignal {
        unpack(self.packed.load(Ordering::Relaxed))
    }
}

impl Default for SignalSlot {
    fn default() -> Self {
        Self::new()
    }
}

fn pack(signal: ControlSignal) -> u64 {
    (signal.distance.to_bits() as u64) | ((signal.active as u64) << 32)
}

fn unpack(bits: u64) -> ControlSignal {
    ControlSignal {
        distance: f32::from_bits(bits as u32),
        active: (bits >> 32) & 1 == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_unpublished_slot_yields_idle() {
        let slot = SignalSlot::new();
        assert_eq!(slot.snapshot(), ControlSignal::IDLE);
    }

    #[test]
    fn test_publish_snapshot_round_trip() {
        let slot = SignalSlot::new();
        let signal = ControlSignal::new(0.62, true);
        slot.publish(signal);
        assert_eq!(slot.snapshot(), signal);
    }

    #[test]
    fn test_last_write_wins() {
        let slot = SignalSlot::new();
        slot.publish(ControlSignal::new(0.1, true));
        slot.publish(ControlSignal::new(0.9, false));
        assert_eq!(slot.snapshot(), ControlSignal::new(0.9, false));
    }

    #[test]
    fn test_concurrent_reads_see_whole_signals() {
        let slot = Arc::new(SignalSlot::new());
        let writer = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || {
                for i in 0..10_000u32 {
                    // Alternate between two internally consistent signals.
                    let signal = if i % 2 == 0 {
                        ControlSignal::new(0.0, false)
                    } else {
                        ControlSignal::new(1.0, true)
                    };
                    slot.publish(signal);
                }
            })
        };
        for _ in 0..10_000 {
            let s = slot.snapshot();
            // A torn read would pair distance 1.0 with active=false or
            // 0.0 with active=true (ignoring the idle seed).
            if s.distance == 1.0 {
                assert!(s.active);
            } else if s.active {
                assert_eq!(s.distance, 0.0);
            }
        }
        writer.join().unwrap();
    }
}
