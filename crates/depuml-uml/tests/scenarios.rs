//! End-to-end scenarios: DOT text in, PlantUML text out.

use pretty_assertions::assert_eq;

use depuml_core::{NodeArena, build_hierarchy, freeze};

const SAMPLE: &str = r##"digraph G {
    concentrate = true;
    rankdir = TB;
    node [style=filled,fillcolor="#ffffff",fontname=Helvetica,fontsize=10];

    app [style="filled"];
        app_main [fillcolor="#039",fontcolor="#fff",label="app.main"];
        app_util [fillcolor="#039",fontcolor="#fff",label="app.util"];
        app_util_helpers [fillcolor="#039",fontcolor="#fff",label="app.util.helpers"];

    app -> app_main [fillcolor="#039"];
    app_util -> app_util_helpers [fillcolor="#039"];
    app_util_helpers -> app_main [fillcolor="#039"];
}
"##;

#[test]
fn nested_packages_and_scoped_arrows() {
    let graph = depuml_dot::load(SAMPLE).unwrap();
    let uml = depuml_uml::render(&graph).unwrap();

    assert_eq!(
        uml,
        "@startuml\n\
         package \"app\" as app___init_ {\n\
         file \"_init_\" as app\n\
         file \"main\" as app__main\n\
         package \"util\" as app__util___init_ {\n\
         file \"_init_\" as app__util\n\
         file \"helpers\" as app__util__helpers\n\
         }\n\
         }\n\
         \n\
         app__main --down[#green]--> app__util__helpers\n\
         app__main -down[#blue]-> app___init_\n\
         app__util__helpers -down[#blue]-> app__util___init_\n\
         @enduml"
    );
}

#[test]
fn dependency_into_nested_package_is_green() {
    // Root package `app`, file `app.main`, package `app.util` with file
    // `app.util.helpers`; main requires helpers.
    let mut arena = NodeArena::new();
    let main = arena.get_or_create("app.main");
    let helpers = arena.get_or_create("app.util.helpers");
    arena.get_or_create("app");
    arena.get_or_create("app.util");
    arena.add_dependency(main, helpers);
    let root = build_hierarchy(&mut arena).unwrap();
    let graph = freeze(&arena, root, "__".to_string()).unwrap();

    let arrows = depuml_uml::arrows(&graph);
    assert_eq!(
        arrows,
        vec!["app__main --down[#green]--> app__util__helpers"]
    );
}

#[test]
fn sibling_dependency_is_a_single_blue_arrow() {
    let mut arena = NodeArena::new();
    let alpha = arena.get_or_create("app.alpha");
    let beta = arena.get_or_create("app.beta");
    arena.get_or_create("app");
    arena.add_dependency(alpha, beta);
    let root = build_hierarchy(&mut arena).unwrap();
    let graph = freeze(&arena, root, "__".to_string()).unwrap();

    let arrows = depuml_uml::arrows(&graph);
    assert_eq!(arrows, vec!["app__alpha -down[#blue]-> app__beta"]);
}

#[test]
fn class_nodes_collapse_into_their_module() {
    let data = r##"digraph G {
    app [style="filled"];
        app_main [fillcolor="#039",label="app.main"];
        app_util_helpers_Helper_process [fillcolor="#039",label="app.util.helpers.Helper.process"];

    app_util_helpers_Helper_process -> app_main [fillcolor="#039"];
    app_util_helpers_Helper_process -> app [fillcolor="#039"];
}
"##;
    let graph = depuml_dot::load(data).unwrap();
    assert!(graph.get("app.util.helpers").is_some());

    let uml = depuml_uml::render(&graph).unwrap();
    assert!(!uml.contains("Helper"));
    assert!(uml.contains("file \"helpers\" as app__util__helpers"));
}

#[test]
fn conversion_is_deterministic() {
    let first = depuml_uml::render(&depuml_dot::load(SAMPLE).unwrap()).unwrap();
    let second = depuml_uml::render(&depuml_dot::load(SAMPLE).unwrap()).unwrap();
    assert_eq!(first, second);
}
