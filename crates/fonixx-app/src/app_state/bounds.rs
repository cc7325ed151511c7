//! Webview placement within the window.

use winit::dpi::PhysicalSize;

/// The webview fills the whole client area.
pub fn window_rect(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_the_window() {
        let rect = window_rect(PhysicalSize::new(1280, 800));
        match rect.position {
            wry::dpi::Position::Physical(pos) => {
                assert_eq!((pos.x, pos.y), (0, 0));
            }
            _ => panic!("Expected physical position"),
        }
        match rect.size {
            wry::dpi::Size::Physical(size) => {
                assert_eq!((size.width, size.height), (1280, 800));
            }
            _ => panic!("Expected physical size"),
        }
    }
}
