use egui::{Context, PointerButton, Pos2, Rect, Vec2};

/// Canvas input in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { position: Pos2 },
    /// Pointer moved, with or without the primary button held
    PointerMove { position: Pos2, button_down: bool },
    /// Primary button was released
    PointerUp { position: Pos2 },
    /// Mouse wheel turned over the canvas
    Wheel {
        delta: f32,
        modifier_held: bool,
        pivot: Pos2,
    },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position, .. }
            | InputEvent::PointerUp { position } => *position,
            InputEvent::Wheel { pivot, .. } => *pivot,
        }
    }
}

/// Converts raw egui input over the canvas widget into [`InputEvent`]s.
///
/// Screen positions are mapped into scene coordinates through the scroll
/// offset: the top-left corner of the canvas content shows `scroll_origin`.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// Full canvas content, possibly larger than the viewport
    canvas_rect: Rect,
    /// Part of the canvas currently visible on screen
    visible_rect: Rect,
    scroll_origin: Pos2,
    /// Whether the current press started on the canvas
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            visible_rect: canvas_rect,
            scroll_origin: Pos2::ZERO,
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangles and the scene point shown at the content's top-left corner
    pub fn set_viewport(&mut self, canvas_rect: Rect, visible_rect: Rect, scroll_origin: Pos2) {
        self.canvas_rect = canvas_rect;
        self.visible_rect = visible_rect.intersect(canvas_rect);
        self.scroll_origin = scroll_origin;
    }

    fn is_over_canvas(&self, pos: Pos2) -> bool {
        self.visible_rect.contains(pos)
    }

    pub fn to_scene(&self, screen: Pos2) -> Pos2 {
        self.scroll_origin + (screen - self.canvas_rect.min)
    }

    pub fn to_screen(&self, scene: Pos2) -> Pos2 {
        self.canvas_rect.min + (scene - self.scroll_origin)
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let primary_down = input.pointer.button_down(PointerButton::Primary);

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = hover.filter(|pos| self.is_over_canvas(*pos)) {
                    self.pressed_on_canvas = true;
                    // The press already places the pointer; no motion until it moves again
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::PointerDown {
                        position: self.to_scene(pos),
                    });
                }
            }

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos
                    && (self.is_over_canvas(pos) || self.pressed_on_canvas)
                {
                    events.push(InputEvent::PointerMove {
                        position: self.to_scene(pos),
                        button_down: primary_down && self.pressed_on_canvas,
                    });
                }
            }
            self.last_pointer_pos = hover;

            if input.pointer.button_released(PointerButton::Primary) && self.pressed_on_canvas {
                self.pressed_on_canvas = false;
                let pos = hover
                    .or(input.pointer.latest_pos())
                    .unwrap_or(self.canvas_rect.min);
                events.push(InputEvent::PointerUp {
                    position: self.to_scene(pos),
                });
            }

            for event in &input.raw.events {
                if let egui::Event::MouseWheel {
                    delta, modifiers, ..
                } = event
                {
                    let Some(pos) = hover.filter(|pos| self.is_over_canvas(*pos)) else {
                        continue;
                    };
                    let delta = wheel_delta(*delta);
                    if delta != 0.0 {
                        events.push(InputEvent::Wheel {
                            delta,
                            modifier_held: modifiers.command || modifiers.ctrl,
                            pivot: self.to_scene(pos),
                        });
                    }
                }
            }
        });

        events
    }
}

// Vertical wheel motion wins; horizontal-only wheels still zoom
fn wheel_delta(delta: Vec2) -> f32 {
    if delta.y != 0.0 { delta.y } else { delta.x }
}
