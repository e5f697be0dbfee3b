use super::model::*;

pub const NUM_AGENTS: usize = 5;

pub const ENTITY_MY_ROBOT: i32 = 0;
pub const ENTITY_ENEMY_ROBOT: i32 = 1;
pub const ENTITY_RADAR: i32 = 2;
pub const ENTITY_TRAP: i32 = 3;

pub const ITEM_NOTHING: i32 = -1;
pub const ITEM_RADAR: i32 = 2;
pub const ITEM_TRAP: i32 = 3;
pub const ITEM_ORE: i32 = 4;

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub struct ObservedCell {
    /// `None` where the cell is fogged ("?" on the wire).
    pub ore: Option<u32>,
    pub hole: bool,
}
impl ObservedCell {
    pub const FOG: ObservedCell = ObservedCell { ore: None, hole: false };
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum EntityKind {
    MyRobot,
    EnemyRobot,
    Radar,
    Trap,
}

#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Entity {
    pub id: i32,
    pub kind: EntityKind,
    pub position: Point,
    pub item: Item,
}

/// Everything the environment tells us at the start of a turn.
#[derive(Clone,Debug)]
pub struct Snapshot {
    pub my_score: i32,
    pub enemy_score: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major, `cells[y * width + x]`, as delivered on the wire.
    pub cells: Vec<ObservedCell>,
    pub radar_cooldown: i32,
    pub trap_cooldown: i32,
    pub entities: Vec<Entity>,
}
impl Snapshot {
    pub fn fogged(width: usize, height: usize) -> Self {
        Self {
            my_score: 0,
            enemy_score: 0,
            width,
            height,
            cells: vec![ObservedCell::FOG; width * height],
            radar_cooldown: 0,
            trap_cooldown: 0,
            entities: Vec::new(),
        }
    }

    pub fn cell_at(&self, x: usize, y: usize) -> ObservedCell {
        self.cells[y * self.width + x]
    }

    pub fn set_cell(&mut self, point: Point, cell: ObservedCell) {
        let index = point.y as usize * self.width + point.x as usize;
        self.cells[index] = cell;
    }

    pub fn my_robots(&self) -> impl Iterator<Item=&Entity> {
        self.entities.iter().filter(|entity| entity.kind == EntityKind::MyRobot)
    }
}
