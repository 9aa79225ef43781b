use crate::board::{Board, WEATHER};
use crate::models::Weather;

pub const ERROR_MESSAGE: &str = "Unable to fetch weather data.";

pub fn lines(weather: &Weather) -> Vec<String> {
    let mut lines = vec![format!("{:.1}°C", weather.main.temp)];
    if let Some(description) = weather.description() {
        lines.push(description.to_string());
    }
    if let Some(ref name) = weather.name {
        lines.push(name.clone());
    }
    lines
}

pub fn render(board: &Board, weather: &Weather) {
    board.set_lines(WEATHER, lines(weather));
}

pub fn render_error(board: &Board) {
    board.show_error(WEATHER, ERROR_MESSAGE);
}
