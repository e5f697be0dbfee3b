use std::fmt::Display;

#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Where the environment reports robots that were destroyed.
    pub const DEAD: Point = Point::new(-1, -1);
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum Item {
    Nothing,
    Radar,
    Trap,
    Ore,
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum ScoutMode {
    Idle,
    /// Radar placed, dig a known vein on the way home instead of returning empty.
    ReturnAfterScout,
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum DiggerMode {
    Idle,
    /// Travelling to the staging point around the scout's deployment target.
    EscortWait,
    /// Parked at the staging point until ore is revealed.
    ResourceWait,
    /// Digging blind around the leader's target because no ore is known.
    Exploring,
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum Role {
    Scout(ScoutMode),
    Digger(DiggerMode),
    Saboteur,
}
impl Role {
    pub fn is_scout(&self) -> bool {
        matches!(self, Role::Scout(_))
    }

    pub fn is_digger(&self) -> bool {
        matches!(self, Role::Digger(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Scout(_) => "Scout",
            Role::Digger(_) => "Digger",
            Role::Saboteur => "Saboteur",
        }
    }
}
impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum Command {
    Wait,
    Move(Point),
    Dig(Point),
    RequestRadar,
    RequestTrap,
}
impl Command {
    /// The cell a move or dig refers to, if any.
    pub fn point(&self) -> Option<Point> {
        match self {
            Command::Move(point) | Command::Dig(point) => Some(*point),
            _ => None,
        }
    }
}
impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Wait => write!(f, "WAIT"),
            Command::Move(p) => write!(f, "MOVE {} {}", p.x, p.y),
            Command::Dig(p) => write!(f, "DIG {} {}", p.x, p.y),
            Command::RequestRadar => write!(f, "REQUEST RADAR"),
            Command::RequestTrap => write!(f, "REQUEST TRAP"),
        }
    }
}
