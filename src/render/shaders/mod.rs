use glium::program;
use glium::Program;
use lazy_static::lazy_static;
use send_wrapper::SendWrapper;

lazy_static! {
    /// Program that draws one instance of a unit square per tile layer,
    /// textured with a cell of the spritesheet.
    pub static ref SPRITESHEET_PROGRAM: SendWrapper<Program> = SendWrapper::new(
        program!(
            &**crate::DISPLAY,
            140 => {
                vertex: include_str!("sprite.vert"),
                fragment: include_str!("sprite.frag"),
                outputs_srgb: false,
            },
        )
        .expect("Failed to compile shader")
    );
}
