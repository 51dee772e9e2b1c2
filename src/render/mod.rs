use glium::index::{NoIndices, PrimitiveType};
use glium::{Frame, Surface, VertexBuffer};
use lazy_static::lazy_static;
use send_wrapper::SendWrapper;

mod shaders;
mod textures;

use crate::game::{Board, BoardState, Cell, Layout, Sprite, TilePos};

/// Maximum number of sprites drawn per draw call.
const TILE_BATCH_SIZE: usize = 256;

/// Color behind the board, visible only while the window is resizing.
const BACKGROUND_COLOR: (f32, f32, f32, f32) = (0.2, 0.2, 0.2, 1.0);

#[derive(Debug, Copy, Clone)]
struct Vertex2D {
    pos: [f32; 2],
}
glium::implement_vertex!(Vertex2D, pos);

#[derive(Debug, Copy, Clone)]
struct TileAttr {
    tile_coords: [i32; 2],
    sprite_coords: [u32; 2],
}
glium::implement_vertex!(TileAttr, tile_coords, sprite_coords);

lazy_static! {
    static ref SQUARE_VBO: SendWrapper<VertexBuffer<Vertex2D>> = SendWrapper::new(
        VertexBuffer::immutable(
            &**crate::DISPLAY,
            &[
                Vertex2D { pos: [0.0, 0.0] },
                Vertex2D { pos: [1.0, 0.0] },
                Vertex2D { pos: [0.0, 1.0] },
                Vertex2D { pos: [1.0, 1.0] },
            ]
        )
        .expect("Failed to create vertex buffer")
    );
    static ref TILE_INSTANCES_VBO: SendWrapper<VertexBuffer<TileAttr>> = SendWrapper::new(
        VertexBuffer::empty_dynamic(&**crate::DISPLAY, TILE_BATCH_SIZE)
            .expect("Failed to create vertex buffer")
    );
}

pub fn draw_board(target: &mut Frame, board: &Board, layout: &mut Layout) {
    // Update target dimensions and get the tile transform.
    layout.set_target_dimensions(target.get_dimensions());
    let tile_transform_matrix: [[f32; 4]; 4] = layout.gl_matrix().into();

    let draw_params = glium::DrawParameters {
        blend: glium::Blend::alpha_blending(),
        ..glium::DrawParameters::default()
    };

    target.clear_color_srgb(
        BACKGROUND_COLOR.0,
        BACKGROUND_COLOR.1,
        BACKGROUND_COLOR.2,
        BACKGROUND_COLOR.3,
    );

    // Layers of each cell are consecutive, bottom first.
    let tiles: Vec<TileAttr> = board
        .cells()
        .flat_map(|cell| {
            let TilePos(x, y) = cell.pos();
            cell_sprites(board, cell).into_iter().map(move |sprite| TileAttr {
                tile_coords: [x, y],
                sprite_coords: textures::sprite_coords(sprite),
            })
        })
        .collect();

    for batch in tiles.chunks(TILE_BATCH_SIZE) {
        let instances_slice = TILE_INSTANCES_VBO
            .slice(0..batch.len())
            .expect("Tile batch exceeds instance buffer");
        instances_slice.write(batch);

        target
            .draw(
                (
                    &**SQUARE_VBO,
                    instances_slice
                        .per_instance()
                        .expect("Instancing is not supported"),
                ),
                &NoIndices(PrimitiveType::TriangleStrip),
                &shaders::SPRITESHEET_PROGRAM,
                &glium::uniform! {
                    spritesheet: textures::tiles_spritesheet(),
                    sheet_dimensions: textures::SHEET_DIMENSIONS,

                    transform: tile_transform_matrix,
                },
                &draw_params,
            )
            .expect("Failed to draw tiles");
    }
}

/// Returns the layers to draw for a cell, bottom first. Once the game is lost,
/// every unflagged mine is shown and the one that ended the game is
/// highlighted.
fn cell_sprites(board: &Board, cell: Cell) -> Vec<Sprite> {
    if board.state() == BoardState::Lost && cell.is_mine() {
        if board.losing_cell() == Some(cell.pos()) {
            return vec![Sprite::Exploded, Sprite::Mine];
        }
        if !cell.is_flagged() {
            return vec![Sprite::Opened, Sprite::Mine];
        }
    }
    cell.sprites().collect()
}
