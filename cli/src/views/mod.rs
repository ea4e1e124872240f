pub mod player;

use crossterm::event::KeyEvent;
use ratatui::Frame;

pub trait View {
    fn render(&mut self, frame: &mut Frame);
    fn handle_input(&mut self, key_event: KeyEvent);
}
