// SPDX-License-Identifier: MPL-2.0
//! Canvas program routing pointer input to the envelope layers.

use super::{card, draw, EnvelopeLabels, Message, ViewContext};
use crate::domain::interaction::{Envelope, EnvelopeVisuals, Layer};
use crate::domain::layout::{self, EnvelopeLayout, Vector};
use crate::domain::reveal::RevealVisuals;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Rectangle, Renderer, Theme};

/// Input device driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    pointer: Pointer,
    layer: Layer,
    origin: layout::Point,
}

/// Canvas-local drag state: which layer is held and where the press began.
///
/// Only one pointer drives a drag at a time; other fingers are ignored until
/// it is released.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    grab: Option<Grab>,
}

impl DragTracker {
    /// Starts a drag on `layer`, if nothing else is held.
    pub fn press(
        &mut self,
        pointer: Pointer,
        position: layout::Point,
        layer: Option<Layer>,
    ) -> Option<Message> {
        if self.grab.is_some() {
            return None;
        }
        let layer = layer?;
        self.grab = Some(Grab {
            pointer,
            layer,
            origin: position,
        });
        Some(Message::DragBegan(layer))
    }

    /// Translation of the held layer relative to the press.
    pub fn moved(&mut self, pointer: Pointer, position: layout::Point) -> Option<Message> {
        let grab = self.grab.filter(|grab| grab.pointer == pointer)?;
        Some(Message::DragMoved {
            layer: grab.layer,
            translation: Vector::new(position.x - grab.origin.x, position.y - grab.origin.y),
        })
    }

    pub fn release(&mut self, pointer: Pointer) -> Option<Message> {
        let grab = self.grab.filter(|grab| grab.pointer == pointer)?;
        self.grab = None;
        Some(Message::DragEnded(grab.layer))
    }

    #[must_use]
    pub fn active_layer(&self) -> Option<Layer> {
        self.grab.map(|grab| grab.layer)
    }
}

/// Canvas program drawing one frame of the envelope scene.
pub struct EnvelopeCanvas<'a> {
    envelope: &'a Envelope,
    layout: &'a EnvelopeLayout,
    reveal: RevealVisuals,
    labels: &'a EnvelopeLabels,
    visuals: EnvelopeVisuals,
}

impl<'a> EnvelopeCanvas<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self {
            envelope: ctx.envelope,
            layout: ctx.layout,
            reveal: ctx.reveal,
            labels: ctx.labels,
            visuals: ctx.envelope.visuals(),
        }
    }

    fn hit_test(&self, position: layout::Point) -> Option<Layer> {
        if self.reveal.show_card {
            return None;
        }
        self.layout
            .hit_test(position, &self.visuals, |layer| self.envelope.accepts(layer))
    }
}

fn to_local(position: iced::Point, bounds: Rectangle) -> layout::Point {
    layout::Point::new(position.x - bounds.x, position.y - bounds.y)
}

fn from_cursor(position: iced::Point) -> layout::Point {
    layout::Point::new(position.x, position.y)
}

impl canvas::Program<Message> for EnvelopeCanvas<'_> {
    type State = DragTracker;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = from_cursor(cursor.position_in(bounds)?);
                state.press(Pointer::Mouse, position, self.hit_test(position))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(position) => state.moved(Pointer::Mouse, from_cursor(position)),
                    // Leaving the canvas ends the drag
                    None => state.release(Pointer::Mouse),
                }
            }
            iced::Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            ) => state.release(Pointer::Mouse),
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                let position = to_local(*position, bounds);
                state.press(Pointer::Finger(id.0), position, self.hit_test(position))
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                state.moved(Pointer::Finger(id.0), to_local(*position, bounds))
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => state.release(Pointer::Finger(id.0)),
            _ => None,
        }?;

        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let variant = self.envelope.variant();

        draw::backdrop(&mut frame, variant, &self.reveal);

        if self.reveal.envelope_opacity > 0.0 {
            draw::envelope(
                &mut frame,
                &draw::EnvelopeScene {
                    variant,
                    layout: self.layout,
                    visuals: &self.visuals,
                    labels: self.labels,
                    alpha: self.reveal.envelope_opacity,
                },
            );
        }

        if self.reveal.show_card {
            card::detached(&mut frame, self.layout, self.labels);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.active_layer().is_some() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.hit_test(from_cursor(position)).is_some() => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}
