use iced::advanced::renderer;
use iced::{Border, Rectangle, Shadow, Vector};
use rangeskin_core::{Circle, ThumbCanvas};

/// Paints thumb circles as fully rounded quads.
pub struct RendererCanvas<'r, Renderer> {
    renderer: &'r mut Renderer,
}

impl<'r, Renderer> RendererCanvas<'r, Renderer> {
    pub fn new(renderer: &'r mut Renderer) -> Self {
        RendererCanvas { renderer }
    }
}

pub fn circle_bounds(circle: &Circle) -> Rectangle {
    Rectangle {
        x: circle.center.x - circle.radius,
        y: circle.center.y - circle.radius,
        width: circle.radius * 2.0,
        height: circle.radius * 2.0,
    }
}

impl<Renderer> ThumbCanvas for RendererCanvas<'_, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn fill_circle(&mut self, circle: Circle) {
        // Blur is carried by the quad's own shadow; an unblurred circle needs none
        let shadow = if circle.blur_radius > 0.0 {
            Shadow {
                color: circle.color,
                offset: Vector::ZERO,
                blur_radius: circle.blur_radius,
            }
        } else {
            Shadow::default()
        };

        self.renderer.fill_quad(
            renderer::Quad {
                bounds: circle_bounds(&circle),
                border: Border {
                    radius: circle.radius.into(),
                    ..Border::default()
                },
                shadow,
            },
            circle.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Color, Point};

    #[test]
    fn bounds_enclose_the_circle() {
        let circle = Circle {
            center: Point::new(50.0, 20.0),
            radius: 10.0,
            color: Color::WHITE,
            blur_radius: 0.0,
        };
        assert_eq!(
            circle_bounds(&circle),
            Rectangle {
                x: 40.0,
                y: 10.0,
                width: 20.0,
                height: 20.0,
            }
        );
    }
}
