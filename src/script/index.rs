//! Script index construction (spec §4.9): every disassemblable script in an
//! archive, named the way `original_source/tinsel.cpp`'s `load_processes`
//! names them. This module only synthesizes names against already-parsed
//! records — it does not touch the catalog itself.

use crate::handle::Handle;
use crate::records::{Actor, Entrance, Object, Poly, ProcessEntry, Scene};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
    pub handle: Handle,
}

fn push_if_present(out: &mut Vec<ScriptEntry>, handle: Handle, name: impl Into<String>) {
    if !handle.is_null() {
        out.push(ScriptEntry { name: name.into(), handle });
    }
}

/// Archive 0's fixed scripts: the master script plus one entry per global
/// process (`CHUNK_PROCESSES`), named `"global process script {i}, pid:
/// {pid:04x}"` with `i` the pair's decimal position.
pub fn global_scripts(h_master_script: Handle, global_processes: &[ProcessEntry]) -> Vec<ScriptEntry> {
    let mut out = Vec::new();
    push_if_present(&mut out, h_master_script, "master script");
    for (i, proc) in global_processes.iter().enumerate() {
        push_if_present(&mut out, proc.handle, format!("global process script {i}, pid: {:04x}", proc.pid));
    }
    out
}

/// One script per object in an archive that holds `CHUNK_OBJECTS`, named
/// `"object {id:x} script"`.
pub fn object_scripts(objects: &[Object]) -> Vec<ScriptEntry> {
    objects
        .iter()
        .filter_map(|o| {
            (!o.h_script.is_null()).then(|| ScriptEntry {
                name: format!("object {:x} script", o.id),
                handle: o.h_script,
            })
        })
        .collect()
}

/// Every script reachable from a scene: the scene script itself, the
/// scene's process table, each entrance's script, each poly's script, and
/// each actor's code handle.
pub fn scene_scripts(
    archive_name: &str,
    scene: &Scene,
    scene_processes: &[ProcessEntry],
    entrances: &[Entrance],
    polys: &[Poly],
    actors: &[Actor],
) -> Vec<ScriptEntry> {
    let mut out = Vec::new();

    push_if_present(
        &mut out,
        scene.h_scene_script,
        format!("scene script {archive_name}"),
    );

    for (i, proc) in scene_processes.iter().enumerate() {
        push_if_present(
            &mut out,
            proc.handle,
            format!("scene process script {i}, pid: {:04x}", proc.pid),
        );
    }

    for entrance in entrances {
        push_if_present(&mut out, entrance.h_script, format!("entrance {:x} script", entrance.e_number));
    }

    for poly in polys {
        push_if_present(&mut out, poly.h_script, format!("poly {:x} script", poly.id));
    }

    for actor in actors {
        push_if_present(&mut out, actor.h_actor_code, format!("actor {:x} script", actor.id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Scene;

    fn empty_scene() -> Scene {
        Scene {
            def_refer: 0,
            h_scene_script: Handle::NULL,
            h_scene_desc: Handle::NULL,
            num_entrance: 0,
            h_entrance: Handle::NULL,
            num_cameras: 0,
            h_camera: Handle::NULL,
            num_lights: 0,
            h_light: Handle::NULL,
            num_poly: 0,
            h_poly: Handle::NULL,
            num_tagged_actor: 0,
            h_tagged_actor: Handle::NULL,
            num_process: 0,
            h_process: Handle::NULL,
            h_music_script: Handle::NULL,
            h_music_segment: Handle::NULL,
        }
    }

    #[test]
    fn global_scripts_skip_null_master_script() {
        let entries = global_scripts(Handle::NULL, &[]);
        assert!(entries.is_empty());
    }

    #[test]
    fn global_scripts_name_master_and_processes_in_order() {
        let procs = vec![
            ProcessEntry { pid: 0x12, handle: Handle::new(0x0100_0010) },
            ProcessEntry { pid: 0x34, handle: Handle::new(0x0100_0020) },
        ];
        let entries = global_scripts(Handle::new(0x0100_0000), &procs);
        assert_eq!(entries[0].name, "master script");
        assert_eq!(entries[1].name, "global process script 0, pid: 0012");
        assert_eq!(entries[2].name, "global process script 1, pid: 0034");
    }

    #[test]
    fn object_scripts_skip_objects_with_no_script() {
        let objects = vec![
            Object { offset: 0, id: 5, h_icon_film: Handle::NULL, h_script: Handle::NULL, attribute: 0, _u: 0, not_clue: 0 },
            Object { offset: 24, id: 6, h_icon_film: Handle::NULL, h_script: Handle::new(0x0100_0030), attribute: 0, _u: 0, not_clue: 0 },
        ];
        let entries = object_scripts(&objects);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "object 6 script");
    }

    #[test]
    fn scene_scripts_names_every_sub_table() {
        let mut scene = empty_scene();
        scene.h_scene_script = Handle::new(0x0200_0000);

        let entrances = vec![Entrance {
            handle: Handle::NULL,
            e_number: 0x10,
            h_script: Handle::new(0x0200_0010),
            h_ent_desc: Handle::NULL,
            flags: 0,
        }];
        let polys = vec![Poly {
            handle: Handle::NULL,
            poly_type: 0,
            x: [0; 4],
            y: [0; 4],
            x_off: 0,
            y_off: 0,
            id: 0x20,
            _ws: 0,
            field: 0,
            reftype: 0,
            tag_x: 0,
            tag_y: 0,
            h_tag_text: Handle::NULL,
            node_x: 0,
            node_y: 0,
            h_film: Handle::NULL,
            scale1: 0,
            scale2: 0,
            level1: 0,
            level2: 0,
            bright1: 0,
            bright2: 0,
            reel_type: 0,
            z_factor: 0,
            node_count: 0,
            node_list_x: 0,
            node_list_y: 0,
            line_list: 0,
            h_script: Handle::new(0x0200_0020),
        }];
        let actors = vec![Actor {
            handle: Handle::NULL,
            id: 0x30,
            h_tag_text: Handle::NULL,
            tag_portion_v: 0,
            tag_portion_h: 0,
            h_actor_code: Handle::new(0x0200_0030),
            tag_flags: 0,
            h_override_tag: Handle::NULL,
        }];

        let entries = scene_scripts("scene01", &scene, &[], &entrances, &polys, &actors);
        assert_eq!(entries[0].name, "scene script scene01");
        assert_eq!(entries[1].name, "entrance 10 script");
        assert_eq!(entries[2].name, "poly 20 script");
        assert_eq!(entries[3].name, "actor 30 script");
    }
}
