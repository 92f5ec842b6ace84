/**
 * Transient Notices
 *
 * A small queue of toast messages. Entries expire on their own; showing
 * them re-renders whatever is still alive in a floating area. Nothing
 * here escalates or logs; a notice is the end of its failure's journey.
 */
use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug)]
struct Notice {
    text: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notices {
    entries: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push(Notice {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    /// Number of notices still alive.
    pub fn active(&mut self) -> usize {
        self.prune();
        self.entries.len()
    }

    fn prune(&mut self) {
        let now = Instant::now();
        self.entries.retain(|notice| notice.expires_at > now);
    }

    /// Draw the live notices in a floating area at the bottom right.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune();
        if self.entries.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("vetdesk_notices"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                for notice in &self.entries {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(&notice.text);
                    });
                }
            });
        // Keep repainting so expiry happens without user input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_notices_are_active() {
        let mut notices = Notices::new();
        notices.push("ValidationError");
        notices.push("User added");
        assert_eq!(notices.active(), 2);
    }

    #[test]
    fn notices_expire() {
        let mut notices = Notices::new();
        notices.push("old news");
        // Force expiry instead of sleeping through the TTL
        notices.entries[0].expires_at = Instant::now() - Duration::from_secs(1);
        assert_eq!(notices.active(), 0);
    }
}
