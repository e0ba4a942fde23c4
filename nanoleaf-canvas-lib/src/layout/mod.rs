//! Maps physical panel ids to stable logical names.
//!
//! The device reports each panel's position in its `positionData`. Panels are
//! sorted by `(x, y)` and names are handed out from the *end* of the name
//! list, so with the default names `"0".."N-1"` the panel closest to the
//! origin is named `"N-1"` and the farthest one is named `"0"`. Deployed
//! animations address panels by these names, so the order must not change.

use std::collections::HashMap;

use log::{debug, info, warn};
use thiserror::Error;

use crate::control_interface::{DeviceInfo, NanoLeafClient, Tile};

/// Positions are reported in multiples of this many units.
const GRID_UNIT: i32 = 50;

const BLANK: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("({0}) not present in the tile mapping")]
    NotFound(String),
    #[error("{names} names supplied for {tiles} tiles")]
    NamesExhausted { tiles: usize, names: usize },
    #[error("name ({0}) assigned to more than one tile")]
    DuplicateName(String),
}

#[derive(Debug, Clone)]
pub struct Layout {
    raw_positional_data: Vec<Tile>,
    /// Tiles in the order names were assigned.
    tile_map: Vec<(String, Tile)>,
    index: HashMap<String, usize>,
    global_orientation: i64,
}

impl Layout {
    /// Queries the device once and builds the name mapping from its panel layout.
    pub async fn detect(client: &NanoLeafClient) -> anyhow::Result<Self> {
        let device_info = client.get_info().await?;
        let layout = Self::from_device_info(&device_info)?;
        info!("Detected {} panels", layout.len());
        Ok(layout)
    }

    pub fn from_device_info(device_info: &DeviceInfo) -> Result<Self, LayoutError> {
        let panel_layout = &device_info.panel_layout;
        let mut layout = Self::from_tiles(panel_layout.layout.position_data.clone())?;
        layout.global_orientation = panel_layout
            .global_orientation
            .as_ref()
            .map_or(0, |orientation| orientation.value);
        Ok(layout)
    }

    /// Builds the mapping with the default names `"0".."N-1"`.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, LayoutError> {
        let names = (0..tiles.len()).map(|i| i.to_string()).collect();
        Self::from_tiles_with_names(tiles, names)
    }

    /// Builds the mapping with a caller supplied name list.
    ///
    /// Names are taken from the end of `names`, one per tile in `(x, y)`
    /// order. Extra names are left unused.
    pub fn from_tiles_with_names(
        tiles: Vec<Tile>,
        names: Vec<String>,
    ) -> Result<Self, LayoutError> {
        if names.len() < tiles.len() {
            return Err(LayoutError::NamesExhausted {
                tiles: tiles.len(),
                names: names.len(),
            });
        }

        let mut sorted = tiles.clone();
        sorted.sort_by_key(|tile| (tile.x, tile.y));

        let mut tile_map = Vec::with_capacity(sorted.len());
        let mut index = HashMap::with_capacity(sorted.len());
        for (tile, name) in sorted.into_iter().zip(names.into_iter().rev()) {
            if index.contains_key(&name) {
                return Err(LayoutError::DuplicateName(name));
            }
            debug!("Tile {} -> panel {} at ({}, {})", name, tile.panel_id, tile.x, tile.y);
            index.insert(name.clone(), tile_map.len());
            tile_map.push((name, tile));
        }

        Ok(Layout {
            raw_positional_data: tiles,
            tile_map,
            index,
            global_orientation: 0,
        })
    }

    pub fn get_tile(&self, name: &str) -> Result<&Tile, LayoutError> {
        self.index
            .get(name)
            .map(|&i| &self.tile_map[i].1)
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))
    }

    /// Translates a logical name to the device panel id, as a decimal string.
    pub fn translate(&self, name: &str) -> Result<String, LayoutError> {
        self.panel_id(name).map(|id| id.to_string())
    }

    pub fn panel_id(&self, name: &str) -> Result<u16, LayoutError> {
        self.get_tile(name).map(|tile| tile.panel_id)
    }

    pub fn len(&self) -> usize {
        self.tile_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_map.is_empty()
    }

    /// Logical names in assignment order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tile_map.iter().map(|(name, _)| name.as_str())
    }

    pub fn raw_positional_data(&self) -> &[Tile] {
        &self.raw_positional_data
    }

    pub fn global_orientation(&self) -> i64 {
        self.global_orientation
    }

    /// Renders the panels as an ASCII grid, one line per non-blank row.
    ///
    /// Positions come in steps of 50, so each panel is drawn as a 2x2 block of
    /// its name at `(x / 50, y / 50)`, with y growing upwards. Panels drawn
    /// later overwrite earlier ones where blocks overlap. Assumes the device
    /// orientation is 0.
    pub fn render_layout(&self) -> String {
        let size = self.raw_positional_data.len() * 2;
        let mut grid = vec![vec![BLANK; size]; size];

        for (name, tile) in &self.tile_map {
            let row = tile.y.div_euclid(GRID_UNIT) as i64;
            let col = tile.x.div_euclid(GRID_UNIT) as i64;
            for (dr, dc) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let (r, c) = (row + dr, col + dc);
                if (0..size as i64).contains(&r) && (0..size as i64).contains(&c) {
                    grid[r as usize][c as usize] = name.as_str();
                } else {
                    debug!("Tile {} at ({}, {}) falls outside the grid", name, tile.x, tile.y);
                }
            }
        }

        grid.iter()
            .rev()
            .filter(|row| row.iter().any(|&cell| cell != BLANK))
            .map(|row| format!("{}\n", row.join(" ")))
            .collect()
    }

    pub fn print_layout(&self) {
        if self.global_orientation != 0 {
            warn!(
                "Global orientation is {}, the grid is drawn unrotated",
                self.global_orientation
            );
        }
        print!("{}", self.render_layout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(panel_id: u16, x: i32, y: i32) -> Tile {
        Tile {
            panel_id,
            x,
            y,
            o: 0,
            shape_type: None,
        }
    }

    fn three_tiles() -> Vec<Tile> {
        vec![tile(82, 0, 0), tile(60, 0, 50), tile(118, 50, 0)]
    }

    #[test]
    fn test_names_are_assigned_from_the_end() {
        let layout = Layout::from_tiles(three_tiles()).unwrap();
        assert_eq!(layout.translate("2").unwrap(), "82");
        assert_eq!(layout.translate("1").unwrap(), "60");
        assert_eq!(layout.translate("0").unwrap(), "118");
        assert_eq!(layout.names().collect::<Vec<_>>(), vec!["2", "1", "0"]);
    }

    #[test]
    fn test_sort_ignores_input_order() {
        let mut tiles = three_tiles();
        tiles.reverse();
        let layout = Layout::from_tiles(tiles).unwrap();
        assert_eq!(layout.panel_id("2").unwrap(), 82);
        assert_eq!(layout.panel_id("0").unwrap(), 118);
        assert_eq!(layout.raw_positional_data()[0].panel_id, 118);
    }

    #[test]
    fn test_one_entry_per_tile() {
        let layout = Layout::from_tiles(three_tiles()).unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.get_tile("1").unwrap(), &tile(60, 0, 50));
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let layout = Layout::from_tiles(three_tiles()).unwrap();
        assert_eq!(
            layout.get_tile("3").unwrap_err(),
            LayoutError::NotFound("3".to_string())
        );
        let err = layout.translate("left").unwrap_err();
        assert!(err.to_string().contains("(left)"));
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::from_tiles(Vec::new()).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.render_layout(), "");
        assert!(layout.translate("0").is_err());
    }

    #[test]
    fn test_custom_names_are_consumed_from_the_end() {
        let names = ["top", "middle", "bottom", "spare"].map(String::from).to_vec();
        let layout = Layout::from_tiles_with_names(three_tiles(), names).unwrap();
        assert_eq!(layout.panel_id("spare").unwrap(), 82);
        assert_eq!(layout.panel_id("bottom").unwrap(), 60);
        assert_eq!(layout.panel_id("middle").unwrap(), 118);
        assert!(layout.get_tile("top").is_err());
    }

    #[test]
    fn test_too_few_names() {
        let err = Layout::from_tiles_with_names(three_tiles(), vec!["a".to_string()]).unwrap_err();
        assert_eq!(err, LayoutError::NamesExhausted { tiles: 3, names: 1 });
    }

    #[test]
    fn test_duplicate_names() {
        let names = ["a", "b", "a"].map(String::from).to_vec();
        let err = Layout::from_tiles_with_names(three_tiles(), names).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateName("a".to_string()));
    }

    #[test]
    fn test_render_layout() {
        let layout = Layout::from_tiles(three_tiles()).unwrap();
        let rendered = layout.render_layout();
        let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["1 1", "1 0 0", "2 0 0"]);
        assert!(rendered.lines().all(|line| line.len() == 11));
    }

    #[test]
    fn test_render_skips_cells_outside_the_grid() {
        let layout = Layout::from_tiles(vec![tile(5, 500, 0)]).unwrap();
        assert_eq!(layout.render_layout(), "");
    }
}
