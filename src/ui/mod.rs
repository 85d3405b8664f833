pub mod flight_scene;
pub mod game_common;

use lunar_descent::flight::FlightSession;
use ratatui::Frame;

/// Draw one frame of the game. `notice` is shown on the status line when a
/// record could not be written.
pub fn draw(frame: &mut Frame, session: &FlightSession, notice: Option<&str>) {
    let area = frame.size();
    flight_scene::render_flight_scene(frame, area, session, notice);
}
