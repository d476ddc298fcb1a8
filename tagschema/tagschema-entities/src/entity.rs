use tagschema_catalog::BuildError;
use tagschema_core::{FieldError, TagCompound, TagKind, TagList, TagNode, TagTypeError};

use crate::schema::{AIR, FALL_DISTANCE, FIRE, MOTION, ON_GROUND, POS, ROTATION};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

/// Fields shared by every entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBase {
    pub pos: Vector3,
    pub motion: Vector3,
    pub rotation: Orientation,
    pub fall_distance: f32,
    pub fire: i16,
    pub air: i16,
    pub on_ground: bool,
}

impl Default for EntityBase {
    fn default() -> Self {
        Self {
            pos: Vector3::default(),
            motion: Vector3::default(),
            rotation: Orientation::default(),
            fall_distance: 0.0,
            fire: -20,
            air: 300,
            on_ground: false,
        }
    }
}

impl EntityBase {
    pub fn from_compound(c: &TagCompound) -> Result<Self, BuildError> {
        let [x, y, z] = read_fixed::<_, _, 3>(c, POS, TagNode::try_double)?;
        let [mx, my, mz] = read_fixed::<_, _, 3>(c, MOTION, TagNode::try_double)?;
        let [yaw, pitch] = read_fixed::<_, _, 2>(c, ROTATION, TagNode::try_float)?;

        Ok(Self {
            pos: Vector3::new(x, y, z),
            motion: Vector3::new(mx, my, mz),
            rotation: Orientation { yaw, pitch },
            fall_distance: c.get_float(FALL_DISTANCE)?,
            fire: c.get_short(FIRE)?,
            air: c.get_short(AIR)?,
            on_ground: c.get_byte(ON_GROUND)? != 0,
        })
    }

    pub fn write_into(&self, c: &mut TagCompound) {
        c.insert(POS, doubles(self.pos));
        c.insert(MOTION, doubles(self.motion));
        c.insert(
            ROTATION,
            TagList::new(
                TagKind::Float,
                vec![self.rotation.yaw.into(), self.rotation.pitch.into()],
            ),
        );
        c.insert(FALL_DISTANCE, self.fall_distance);
        c.insert(FIRE, self.fire);
        c.insert(AIR, self.air);
        c.insert(ON_GROUND, i8::from(self.on_ground));
    }
}

fn doubles(v: Vector3) -> TagList {
    TagList::new(TagKind::Double, vec![v.x.into(), v.y.into(), v.z.into()])
}

/// Read a list of exactly `N` elements of one kind.
fn read_fixed<T, F, const N: usize>(
    c: &TagCompound,
    name: &str,
    read: F,
) -> Result<[T; N], BuildError>
where
    T: Copy + Default,
    F: Fn(&TagNode) -> Result<T, TagTypeError>,
{
    let list = c.get_list(name)?;
    if list.len() != N {
        return Err(BuildError::Invalid(format!(
            "`{name}` has {} elements, expected {N}",
            list.len()
        )));
    }

    let mut out = [T::default(); N];
    for (i, (slot, item)) in out.iter_mut().zip(list.iter()).enumerate() {
        *slot = read(item).map_err(|source| FieldError::WrongKind {
            field: format!("{name}[{i}]"),
            source,
        })?;
    }
    Ok(out)
}
