use std::io::BufRead;
use std::str::FromStr;

use super::error::InputError;
use super::inputs::*;
use super::model::*;

fn read_line(input: &mut impl BufRead, what: &'static str) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::EndOfInput);
    }
    if line.trim().is_empty() {
        return Err(InputError::Malformed { what, reason: "empty line".to_owned() });
    }
    Ok(line)
}

fn parse_input<T: FromStr>(token: &str, what: &'static str) -> Result<T, InputError> {
    token.trim().parse::<T>().map_err(|_| InputError::InvalidInteger {
        what,
        value: token.to_owned(),
    })
}

fn expect_tokens<'a>(line: &'a str, count: usize, what: &'static str) -> Result<Vec<&'a str>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < count {
        return Err(InputError::Malformed {
            what,
            reason: format!("expected {} values, got {}", count, tokens.len()),
        });
    }
    Ok(tokens)
}

/// Map size, sent once before the first turn.
pub fn read_initial(input: &mut impl BufRead) -> Result<(usize, usize), InputError> {
    let line = read_line(input, "map size")?;
    let inputs = expect_tokens(&line, 2, "map size")?;
    let width = parse_input::<usize>(inputs[0], "map size")?;
    let height = parse_input::<usize>(inputs[1], "map size")?; // size of the map
    if width == 0 || height == 0 {
        return Err(InputError::Malformed { what: "map size", reason: format!("{}x{} map", width, height) });
    }
    Ok((width, height))
}

pub fn read_turn(input: &mut impl BufRead, width: usize, height: usize) -> Result<Snapshot, InputError> {
    let mut snapshot = Snapshot::fogged(width, height);

    let line = read_line(input, "scores")?;
    let inputs = expect_tokens(&line, 2, "scores")?;
    snapshot.my_score = parse_input(inputs[0], "scores")?; // amount of ore delivered
    snapshot.enemy_score = parse_input(inputs[1], "scores")?;

    for y in 0..height {
        let line = read_line(input, "map row")?;
        let inputs = expect_tokens(&line, 2 * width, "map row")?;
        for x in 0..width {
            let ore = match inputs[2 * x] {
                "?" => None,
                token => Some(parse_input::<u32>(token, "map row")?),
            };
            let hole = parse_input::<i32>(inputs[2 * x + 1], "map row")? == 1; // 1 if cell has a hole
            snapshot.cells[y * width + x] = ObservedCell { ore, hole };
        }
    }

    let line = read_line(input, "entity header")?;
    let inputs = expect_tokens(&line, 3, "entity header")?;
    let entity_count = parse_input::<usize>(inputs[0], "entity header")?; // number of entities visible to you
    snapshot.radar_cooldown = parse_input(inputs[1], "entity header")?; // turns left until a new radar can be requested
    snapshot.trap_cooldown = parse_input(inputs[2], "entity header")?; // turns left until a new trap can be requested

    for _ in 0..entity_count {
        let line = read_line(input, "entity")?;
        snapshot.entities.push(parse_entity(&line)?);
    }

    Ok(snapshot)
}

fn parse_entity(line: &str) -> Result<Entity, InputError> {
    let inputs = expect_tokens(line, 5, "entity")?;
    let id = parse_input::<i32>(inputs[0], "entity")?;
    let kind = match parse_input::<i32>(inputs[1], "entity")? {
        ENTITY_MY_ROBOT => EntityKind::MyRobot,
        ENTITY_ENEMY_ROBOT => EntityKind::EnemyRobot,
        ENTITY_RADAR => EntityKind::Radar,
        ENTITY_TRAP => EntityKind::Trap,
        wrong => return Err(InputError::Malformed { what: "entity", reason: format!("invalid entity type {}", wrong) }),
    };
    let x = parse_input::<i32>(inputs[2], "entity")?;
    let y = parse_input::<i32>(inputs[3], "entity")?;
    let item = match parse_input::<i32>(inputs[4], "entity")? {
        ITEM_NOTHING => Item::Nothing,
        ITEM_RADAR => Item::Radar,
        ITEM_TRAP => Item::Trap,
        ITEM_ORE => Item::Ore,
        wrong => return Err(InputError::Malformed { what: "entity", reason: format!("invalid item {}", wrong) }),
    };
    Ok(Entity {
        id,
        kind,
        position: Point::new(x, y),
        item,
    })
}

pub fn format_command(command: &Command, role: Option<&Role>) -> String {
    match role {
        Some(role) => format!("{} {}", command, role),
        None => command.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TURN: &str = "\
4 1
? 0 ? 0 2 0 ? 0
? 0 0 1 ? 0 1 1
3 0 0
0 0 0 1 -1
1 1 2 1 -1
7 2 3 1 -1
";

    #[test]
    fn reads_header() {
        let mut input = Cursor::new("30 15\n");
        assert_eq!(read_initial(&mut input).unwrap(), (30, 15));
    }

    #[test]
    fn reads_a_turn() {
        let mut input = Cursor::new(TURN);
        let snapshot = read_turn(&mut input, 4, 2).unwrap();

        assert_eq!(snapshot.my_score, 4);
        assert_eq!(snapshot.enemy_score, 1);
        assert_eq!(snapshot.cell_at(0, 0), ObservedCell::FOG);
        assert_eq!(snapshot.cell_at(2, 0), ObservedCell { ore: Some(2), hole: false });
        assert_eq!(snapshot.cell_at(1, 1), ObservedCell { ore: Some(0), hole: true });
        assert_eq!(snapshot.cell_at(3, 1), ObservedCell { ore: Some(1), hole: true });
        assert_eq!(snapshot.entities.len(), 3);
        assert_eq!(snapshot.entities[0].kind, EntityKind::MyRobot);
        assert_eq!(snapshot.entities[0].position, Point::new(0, 1));
        assert_eq!(snapshot.entities[2].kind, EntityKind::Radar);
        assert_eq!(snapshot.my_robots().count(), 1);
    }

    #[test]
    fn robot_cargo_is_decoded() {
        let entity = parse_entity("3 0 12 4 4").unwrap();
        assert_eq!(entity.item, Item::Ore);
        assert_eq!(parse_entity("3 0 12 4 3").unwrap().item, Item::Trap);
        assert_eq!(parse_entity("3 0 -1 -1 -1").unwrap().position, Point::DEAD);
        assert_eq!(parse_entity("8 1 5 5 -1").unwrap().item, Item::Nothing);
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut input = Cursor::new("");
        assert!(matches!(read_initial(&mut input), Err(InputError::EndOfInput)));
    }

    #[test]
    fn garbage_is_rejected() {
        let mut input = Cursor::new("4 1\n? 0 x 0\n");
        assert!(matches!(read_turn(&mut input, 2, 1), Err(InputError::InvalidInteger { .. })));

        let mut input = Cursor::new("4 1\n? 0\n");
        assert!(matches!(read_turn(&mut input, 2, 1), Err(InputError::Malformed { .. })));

        assert!(parse_entity("1 9 0 0 -1").is_err());
        assert!(parse_entity("1 0 0 0 7").is_err());
    }

    #[test]
    fn commands_can_carry_role_name() {
        let command = Command::Dig(Point::new(4, 2));
        assert_eq!(format_command(&command, None), "DIG 4 2");
        assert_eq!(format_command(&command, Some(&Role::Saboteur)), "DIG 4 2 Saboteur");
    }
}
