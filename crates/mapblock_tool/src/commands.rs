use std::path::{Path, PathBuf};

use mapblock_edit::{CellClass, EditorOptions, MapBlock, PaintController, RefreshRequest, RepaintSink, SurfaceDescriptor, SurfaceId};

/// A single brush stroke given on the command line.
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    pub x: i32,
    pub y: i32,
    pub size: Option<i32>,
    pub erase: bool,
}

/// There is no renderer on the command line; repaints are only traced.
#[derive(Default)]
struct LogSink {
    requests: usize,
}

impl RepaintSink for LogSink {
    fn repaint(&mut self, request: &RefreshRequest) {
        self.requests += 1;
        let blocked = request.cells.iter().filter(|c| **c == CellClass::Blocked).count();
        log::trace!("repaint {} {} ({blocked} blocked)", request.surface, request.area);
    }
}

/// One surface covering the whole grid, placed at the map origin.
fn whole_grid_surface(options: &EditorOptions, map_block: &MapBlock) -> SurfaceDescriptor {
    SurfaceDescriptor::new(SurfaceId(0), map_block.width(), map_block.height(), options.map_origin)
}

pub fn open(path: &Path) -> anyhow::Result<MapBlock> {
    Ok(MapBlock::load_file(path)?)
}

pub fn create(options: &EditorOptions, path: &Path, width: i32, height: i32) -> anyhow::Result<MapBlock> {
    let mut controller = PaintController::from_options(options);
    let mut sink = LogSink::default();
    controller.create_map_block(width, height, &[], &mut sink)?;
    controller.save_file(Some(path))?;
    controller.take_map_block().ok_or_else(|| anyhow::anyhow!("map block vanished after saving"))
}

/// Applies `stroke` to the map block at `path` and saves it to `output`, or back to `path`.
pub fn brush(options: &EditorOptions, path: &Path, output: Option<&Path>, stroke: Stroke) -> anyhow::Result<PathBuf> {
    let map_block = MapBlock::load_file(path)?;
    let surface = whole_grid_surface(options, &map_block);

    let mut controller = PaintController::from_options(options);
    let mut sink = LogSink::default();
    controller.reload(map_block, &[surface], &mut sink)?;
    controller.set_brush_mode(true);
    if let Some(size) = stroke.size {
        controller.set_brush_size(size);
    }
    controller.on_brushed(&surface, stroke.x, stroke.y, !stroke.erase, &mut sink)?;
    log::info!(
        "Brushed {} at ({}, {}) with size {}, {} repaints",
        if stroke.erase { "free" } else { "blocked" },
        stroke.x,
        stroke.y,
        controller.brush().size(),
        sink.requests
    );
    Ok(controller.save_file(output)?)
}

pub fn describe(map_block: &MapBlock) -> String {
    let name = map_block.file_name().map_or_else(|| "<unnamed>".to_string(), |p| p.display().to_string());
    format!(
        "{name}: {}x{} cells, {} blocked, {} bytes",
        map_block.width(),
        map_block.height(),
        map_block.blocked_count(),
        map_block.data().len()
    )
}

/// Text rendering of the grid, one line per row.
pub fn render(map_block: &MapBlock) -> String {
    let mut result = String::with_capacity((map_block.width() as usize + 1) * map_block.height() as usize);
    for y in 0..map_block.height() {
        for x in 0..map_block.width() {
            result.push(if map_block.is_blocked(x, y) { '#' } else { '.' });
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mapblock_tool_{}_{name}.bytes", std::process::id()))
    }

    #[test]
    fn test_render() {
        let mut map_block = MapBlock::new(4, 2).unwrap();
        map_block.set_blocked(1, 0, true);
        map_block.set_blocked(3, 1, true);
        assert_eq!(render(&map_block), ".#..\n...#\n");
    }

    #[test]
    fn test_create_and_brush() {
        let path = temp_path("create_and_brush");
        let options = EditorOptions::default();
        let created = create(&options, &path, 20, 18).unwrap();
        assert_eq!((created.width(), created.height()), (20, 18));

        let stroke = Stroke {
            x: 5,
            y: 5,
            size: Some(3),
            erase: false,
        };
        assert_eq!(brush(&options, &path, None, stroke).unwrap(), path);

        let map_block = open(&path).unwrap();
        assert_eq!(map_block.blocked_count(), 16);
        assert!(map_block.is_blocked(3, 3));
        assert!(map_block.is_blocked(6, 6));
        assert!(!map_block.is_blocked(7, 7));

        let erase = Stroke {
            x: 5,
            y: 5,
            size: Some(1),
            erase: true,
        };
        brush(&options, &path, None, erase).unwrap();
        assert_eq!(open(&path).unwrap().blocked_count(), 15);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_create_clamps_small_sizes() {
        let path = temp_path("small");
        let created = create(&EditorOptions::default(), &path, 2, 2).unwrap();
        assert_eq!((created.width(), created.height()), (16, 16));
        std::fs::remove_file(&path).unwrap();
    }
}
