use super::controller::SketchController;
use crate::config::Action;
use crate::input::{Control, InputEvent, Key, Modifiers, PointerPhase, TouchPhase};
use crate::surface::Surface;
use log::{debug, error};

impl<S: Surface> SketchController<S> {
    /// Routes one host event to the matching operation.
    ///
    /// Pointer and touch gestures drive the stroke lifecycle; each host event
    /// must be delivered once, whichever input family produced it.
    pub async fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pointer { phase, position } => match phase {
                PointerPhase::Down => self.begin_stroke(position),
                PointerPhase::Move => self.extend_stroke(position),
                PointerPhase::Up | PointerPhase::Leave => self.end_stroke(),
            },
            InputEvent::Touch { phase, touches } => {
                let origin = self.surface_origin();
                let position = touches.first().map(|touch| origin.to_surface(*touch));
                match (phase, position) {
                    (TouchPhase::Start, Some(position)) => self.begin_stroke(position),
                    (TouchPhase::Move, Some(position)) => self.extend_stroke(position),
                    (TouchPhase::End | TouchPhase::Cancel, _) => self.end_stroke(),
                    (TouchPhase::Start | TouchPhase::Move, None) => {
                        debug!("Ignoring {:?} without touch points", phase);
                    }
                }
            }
            InputEvent::KeyPress { key, modifiers } => {
                if let Some(action) = self.find_action(key, modifiers) {
                    self.run_action(action);
                }
            }
            InputEvent::Click(control) => match control {
                Control::Undo => self.run_action(Action::Undo),
                Control::Export => self.run_action(Action::ExportDrawing),
                Control::CreateImage => self.run_action(Action::CreateImage),
                Control::Import => self.deps.presenter.open_file_chooser(),
                Control::Clear => debug!("Clear needs a double activation"),
            },
            InputEvent::DoubleClick(Control::Clear) => self.run_action(Action::ClearCanvas),
            InputEvent::DoubleClick(_) => {}
            InputEvent::NicknameSubmitted(text) => self.save_nickname(&text),
            InputEvent::FileSelected(path) => {
                // Failures are already reported to the user by import_file
                let _ = self.import_file(&path).await;
            }
        }
    }

    fn find_action(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        let name = key.name()?;
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(&name, modifiers.ctrl, modifiers.shift, modifiers.alt)
            })
            .map(|(_, action)| *action)
    }

    fn run_action(&mut self, action: Action) {
        match action {
            Action::Undo => self.undo(),
            Action::ClearCanvas => self.clear(),
            Action::ExportDrawing => {
                if let Err(err) = self.export() {
                    error!("Export failed: {}", err);
                }
            }
            Action::CreateImage => {
                if let Err(err) = self.rasterize_to_image() {
                    error!("Image export failed: {}", err);
                }
            }
        }
    }
}
