use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events relevant to the canvas, with positions translated into
/// canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the canvas. `None` means the device
    /// reported no position; consumers default it to the origin.
    Down { pos: Option<Pos2> },
    /// Pointer moved, inside the canvas or not. Out-of-bounds moves are
    /// delivered too so an active gesture can cancel itself.
    Move { pos: Pos2 },
    /// Primary button released, wherever the pointer is.
    Up,
    /// Pointer left the window entirely.
    Leave,
}

/// Converts raw egui input into canvas pointer events, one batch per frame.
///
/// Events come out in the order the event loop observed them, so a move can
/// never precede its gesture's down.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    pub fn collect(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| pos - canvas_rect.min.to_vec2();

        ctx.input(|input| {
            match input.pointer.hover_pos() {
                Some(pos) => {
                    if self.last_pointer_pos != Some(pos) {
                        events.push(PointerEvent::Move { pos: to_local(pos) });
                        self.last_pointer_pos = Some(pos);
                    }
                }
                None => {
                    if self.last_pointer_pos.is_some() {
                        events.push(PointerEvent::Leave);
                        self.last_pointer_pos = None;
                    }
                }
            }

            if input.pointer.button_pressed(PointerButton::Primary) {
                match input.pointer.interact_pos() {
                    Some(pos) if canvas_rect.contains(pos) => {
                        events.push(PointerEvent::Down {
                            pos: Some(to_local(pos)),
                        });
                    }
                    // Press landed on other UI, not the canvas.
                    Some(_) => {}
                    None => events.push(PointerEvent::Down { pos: None }),
                }
            }

            if input.pointer.button_released(PointerButton::Primary) {
                events.push(PointerEvent::Up);
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
