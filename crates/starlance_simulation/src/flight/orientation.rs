//! Orientation math: (yaw, pitch, roll) в градусах → direction / attitude
//!
//! Конвенция полей rotation:
//! - `rotation.x` — pitch (вертикальное наведение)
//! - `rotation.y` — yaw (участвует ТОЛЬКО в attitude для рендера)
//! - `rotation.z` — heading/roll (горизонтальный разворот)
//!
//! Асимметрия намеренная: перемещение и camera-up игнорируют yaw.
//! Все функции чистые, углы не нормализуются — периодичность sin/cos
//! сама сворачивает накопленные сотни градусов.

use bevy::prelude::*;

/// Единичный forward-вектор из rotation (градусы).
///
/// ```text
/// x = cos(heading) * cos(-pitch)
/// z = sin(heading) * cos(-pitch)
/// y = sin(-pitch)
/// ```
pub fn flight_direction(rotation_deg: Vec3) -> Vec3 {
    let heading = rotation_deg.z.to_radians();
    let pitch = (-rotation_deg.x).to_radians();

    Vec3::new(
        heading.cos() * pitch.cos(),
        pitch.sin(),
        heading.sin() * pitch.cos(),
    )
}

/// «Верх» для chase camera: тот же вектор, но pitch-слагаемое сдвинуто
/// на +90° — up остаётся перпендикулярным forward-оси корабля.
pub fn chase_up(rotation_deg: Vec3) -> Vec3 {
    let heading = rotation_deg.z.to_radians();
    let pitch = (-rotation_deg.x + 90.0).to_radians();

    Vec3::new(
        heading.cos() * pitch.cos(),
        pitch.sin(),
        heading.sin() * pitch.cos(),
    )
}

/// Attitude корпуса для рендера: элементарные повороты в фиксированном
/// порядке — Z на `rotation.x`, затем X на `rotation.y`, затем Y на
/// `rotation.z`. Порядок некоммутативен и должен совпадать точно.
///
/// В column-конвенции glam «применить A первым» пишется справа, поэтому
/// цепочка Z, X, Y превращается в произведение Y * X * Z.
pub fn hull_attitude(rotation_deg: Vec3) -> Quat {
    Quat::from_rotation_y(rotation_deg.z.to_radians())
        * Quat::from_rotation_x(rotation_deg.y.to_radians())
        * Quat::from_rotation_z(rotation_deg.x.to_radians())
}
