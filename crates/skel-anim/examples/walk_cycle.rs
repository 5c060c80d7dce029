//! Drive a small leg rig through a looping walk cycle and print the palette

use std::f32::consts::FRAC_PI_4;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use skel_anim::import::{
    ImportedAnimation, ImportedBone, ImportedChannel, ImportedKey, ImportedNode, ImportedSkeleton,
};
use skel_anim::{
    AnimationClip, AnimationSystem, BindPaletteMode, ClipOptions, EntityId, Skeleton,
    SkeletonOptions,
};

fn leg_rig() -> ImportedSkeleton {
    let bone = |name: &str, height: f32| ImportedBone {
        name: name.to_string(),
        inverse_bind: Mat4::from_translation(Vec3::new(0.0, -height, 0.0)),
    };

    ImportedSkeleton {
        name: "leg".to_string(),
        bones: vec![bone("hip", 2.0), bone("knee", 1.0), bone("ankle", 0.0)],
        root: ImportedNode::new("armature", Mat4::IDENTITY).with_child(
            ImportedNode::new("hip", Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0))).with_child(
                ImportedNode::new("knee", Mat4::from_translation(Vec3::NEG_Y))
                    .with_child(ImportedNode::new("ankle", Mat4::from_translation(Vec3::NEG_Y))),
            ),
        ),
    }
}

fn walk() -> ImportedAnimation {
    let swing = |amplitude: f32| ImportedChannel {
        rotation_keys: vec![
            ImportedKey::new(0.0, Quat::from_rotation_x(amplitude)),
            ImportedKey::new(12.0, Quat::from_rotation_x(-amplitude)),
            ImportedKey::new(24.0, Quat::from_rotation_x(amplitude)),
        ],
        ..Default::default()
    };

    ImportedAnimation {
        name: "walk".to_string(),
        duration: 24.0,
        ticks_per_second: 24.0,
        channels: vec![
            ImportedChannel {
                bone_name: "hip".to_string(),
                ..swing(FRAC_PI_4)
            },
            ImportedChannel {
                bone_name: "knee".to_string(),
                ..swing(FRAC_PI_4 / 2.0)
            },
        ],
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = SkeletonOptions {
        bind_palette: BindPaletteMode::RestPose,
    };
    let skeleton = Arc::new(Skeleton::from_import(&leg_rig(), &options)?);
    let clip = Arc::new(AnimationClip::from_import(
        &walk(),
        &skeleton,
        &ClipOptions::default(),
    )?);

    println!(
        "Skeleton '{}': {} bones, {} nodes",
        skeleton.name(),
        skeleton.bone_count(),
        skeleton.node_count()
    );
    println!(
        "Clip '{}': {} tracks, {:.2}s",
        clip.name(),
        clip.track_count(),
        clip.duration_seconds()
    );

    let entity = EntityId(1);
    let mut system = AnimationSystem::new();
    system.insert(entity, Arc::clone(&skeleton))?;
    system.bind(entity, clip)?;

    let ankle = skeleton
        .find_bone("ankle")
        .ok_or_else(|| anyhow::anyhow!("rig has no ankle bone"))?;

    for frame in 0..=8 {
        system.update(0.125);
        let Some(instance) = system.instance(entity) else {
            break;
        };
        let position = instance.global_pose().bone(ankle).transform_point3(Vec3::ZERO);
        println!(
            "  t={:.3}s  ankle=({:+.3}, {:+.3}, {:+.3})  binding={:?}",
            instance.playback().current_seconds(),
            position.x,
            position.y,
            position.z,
            instance.binding()
        );
        if frame == 4 {
            system.pause(entity)?;
            println!("  paused");
        } else if frame == 5 {
            system.play(entity)?;
            println!("  resumed");
        }
    }

    system.stop(entity)?;
    let palette = system
        .bound_palette(entity)
        .ok_or_else(|| anyhow::anyhow!("entity {entity} has no palette"))?;
    println!(
        "Stopped: bound palette is the rest pose ({} floats for upload)",
        palette.to_gpu_data().len()
    );

    Ok(())
}
