// tests/completion_scenarios.rs
// End-to-end completion scenarios on a small three-server network:
// home <-> near <-> far, with far not directly reachable from home.

use netterm_core::{Host, TabCompleter, World};

fn network() -> World {
    let mut world = World::with_home("home");
    world.add_host(Host::new("near"));
    world.add_host(Host::new("far"));
    world.connect_hosts("home", "near");
    world.connect_hosts("near", "far");
    world
}

fn home(world: &mut World) -> &mut Host {
    world.host_mut("home").expect("home must exist")
}

fn complete(world: &World, line: &str, index: usize) -> Vec<String> {
    TabCompleter::new(world)
        .complete(line, index, "")
        .expect("completion should not fail")
}

#[test]
fn completes_connect_one_hop_only() {
    let world = network();
    assert_eq!(complete(&world, "connect ", 0), vec!["near"]);
}

#[test]
fn connect_is_symmetric() {
    let mut world = network();
    world.player.current_server = "near".to_string();
    assert_eq!(complete(&world, "connect ", 0), vec!["home", "far"]);

    world.player.current_server = "far".to_string();
    assert_eq!(complete(&world, "connect ", 0), vec!["near"]);
}

#[test]
fn completes_buy_with_full_catalog() {
    let world = network();
    let mut options = complete(&world, "buy ", 0);
    options.sort();

    let mut expected = vec![
        "BruteSSH.exe",
        "FTPCrack.exe",
        "relaySMTP.exe",
        "HTTPWorm.exe",
        "SQLInject.exe",
        "DeepscanV1.exe",
        "DeepscanV2.exe",
        "AutoLink.exe",
        "ServerProfiler.exe",
        "Formulas.exe",
    ];
    expected.sort();
    assert_eq!(options, expected);

    // unaffected by files on the host
    let mut busy = network();
    home(&mut busy).write_script("/www/script.js", "oh hai mark");
    assert_eq!(complete(&busy, "buy ", 0), complete(&world, "buy ", 0));
}

#[test]
fn completes_scp() {
    let mut world = network();
    home(&mut world).write_text_file("note.txt", "oh hai mark");
    home(&mut world).add_message("af.lit");
    home(&mut world).write_script("/www/script.js", "oh hai mark");

    assert_eq!(
        complete(&world, "scp ", 0),
        vec!["/www/script.js", "af.lit", "note.txt", "www/"]
    );
    assert_eq!(complete(&world, "scp note.txt ", 1), vec!["home", "near"]);
}

#[test]
fn scp_targets_follow_current_host() {
    let mut world = network();
    world.player.current_server = "near".to_string();
    // home is offered once even though it is also a neighbour
    assert_eq!(complete(&world, "scp a.js ", 1), vec!["home", "far"]);
}

#[test]
fn completes_kill_tail_mem_check() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    for command in ["kill", "tail", "mem", "check"] {
        let options = complete(&world, &format!("{command} "), 0);
        assert_eq!(options, vec!["/www/script.js", "www/"], "{command}");
    }
}

#[test]
fn completes_nano() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    home(&mut world).write_text_file("note.txt", "oh hai mark");
    assert_eq!(
        complete(&world, "nano ", 0),
        vec!["/www/script.js", "note.txt", "www/"]
    );
}

#[test]
fn completes_rm() {
    let mut world = network();
    home(&mut world).write_text_file("note.txt", "oh hai mark");
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    home(&mut world).add_contract("linklist.cct");
    home(&mut world).add_message("asl.msg");
    home(&mut world).add_message("af.lit");
    assert_eq!(
        complete(&world, "rm ", 0),
        vec!["/www/script.js", "NUKE.exe", "af.lit", "note.txt", "linklist.cct", "www/"]
    );
}

#[test]
fn completes_run() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    home(&mut world).add_contract("linklist.cct");
    assert_eq!(
        complete(&world, "run ", 0),
        vec!["/www/script.js", "NUKE.exe", "linklist.cct", "www/"]
    );
}

#[test]
fn completes_cat() {
    let mut world = network();
    home(&mut world).write_text_file("/www/note.txt", "oh hai mark");
    home(&mut world).add_message("asl.msg");
    home(&mut world).add_message("af.lit");
    assert_eq!(
        complete(&world, "cat ", 0),
        vec!["asl.msg", "af.lit", "/www/note.txt", "www/"]
    );
}

#[test]
fn completes_download_and_mv() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    home(&mut world).write_text_file("note.txt", "oh hai mark");
    for command in ["download", "mv"] {
        let options = complete(&world, &format!("{command} "), 0);
        assert_eq!(options, vec!["/www/script.js", "note.txt", "www/"], "{command}");
    }
}

#[test]
fn completes_ls_and_cd() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    for command in ["ls", "cd"] {
        assert_eq!(complete(&world, &format!("{command} "), 0), vec!["www/"]);
    }
}

#[test]
fn completes_paths_starting_with_dot_slash() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    assert_eq!(
        complete(&world, "run ./", 0),
        vec![".//www/script.js", "NUKE.exe", "./www/"]
    );
}

#[test]
fn repeated_relative_markers_are_echoed() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "oh hai mark");
    assert_eq!(
        complete(&world, "run ././", 0),
        vec!["././/www/script.js", "NUKE.exe", "././www/"]
    );
}

#[test]
fn directories_collapse_to_one_entry() {
    let mut world = network();
    home(&mut world).write_script("/www/a.js", "");
    home(&mut world).write_script("/www/b.js", "");
    assert_eq!(complete(&world, "cd ", 0), vec!["www/"]);
}

#[test]
fn navigates_into_typed_directory() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "");
    home(&mut world).write_script("/www/lib/util.js", "");
    home(&mut world).write_text_file("note.txt", "");

    assert_eq!(complete(&world, "cd www/", 0), vec!["www/lib/"]);
    assert_eq!(
        complete(&world, "nano www/sc", 0),
        vec!["www/script.js", "www/lib/util.js", "www/lib/"]
    );
}

#[test]
fn resolves_against_working_directory() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "");
    home(&mut world).add_contract("linklist.cct");
    let completer = TabCompleter::new(&world);

    assert_eq!(
        completer.complete("run ", 0, "/www").unwrap(),
        vec!["script.js"]
    );
    assert_eq!(
        completer.complete("run ../", 0, "www/").unwrap(),
        vec!["../www/script.js", "NUKE.exe", "linklist.cct", "../www/"]
    );
}

#[test]
fn same_name_in_two_kinds_is_listed_once() {
    let mut world = network();
    home(&mut world).write_text_file("af.lit", "");
    home(&mut world).add_message("af.lit");
    assert_eq!(complete(&world, "rm ", 0), vec!["NUKE.exe", "af.lit"]);
}

#[test]
fn completion_is_idempotent() {
    let mut world = network();
    home(&mut world).write_script("/www/script.js", "");
    home(&mut world).write_text_file("note.txt", "");
    home(&mut world).add_message("af.lit");
    for (line, index) in [("scp ", 0), ("scp x ", 1), ("rm ", 0), ("run ./", 0)] {
        assert_eq!(complete(&world, line, index), complete(&world, line, index));
    }
}

#[test]
fn hostname_slots_ignore_path_like_tokens() {
    let world = network();
    assert_eq!(complete(&world, "connect ../", 0), vec!["near"]);
    assert_eq!(complete(&world, "scp x ../", 1), vec!["home", "near"]);
    assert_eq!(complete(&world, "connect ../../far", 0), vec!["near"]);
}

#[test]
fn cat_lists_messages_before_literature() {
    let mut world = network();
    home(&mut world).add_message("af.lit");
    home(&mut world).add_message("asl.msg");
    assert_eq!(complete(&world, "cat ", 0), vec!["asl.msg", "af.lit"]);
}

#[test]
fn unexpected_input_yields_nothing() {
    let world = network();
    assert!(complete(&world, "grow ", 0).is_empty());
    assert!(complete(&world, "Connect ", 0).is_empty());
    assert!(complete(&world, "cd a ", 1).is_empty());
    assert!(complete(&world, "", 0).is_empty());
}
