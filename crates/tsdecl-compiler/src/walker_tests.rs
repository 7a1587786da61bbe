use tsdecl_core::{ClassMetadata, ClassRegistry, TypeDescriptor, TypeParameter};

use crate::test_utils::{class, prim, prop};
use crate::transform::TransformerPipeline;
use crate::walker::{ClassGraphWalker, DiscoveredClassSet};
use crate::{Config, Error, Result};

fn discover<'p>(registry: &'p ClassRegistry, roots: &[&str]) -> Result<DiscoveredClassSet<'p>> {
    let config = Config::default();
    let transformers = TransformerPipeline::new();
    ClassGraphWalker::new(registry, &config, &transformers).discover(roots.iter().copied())
}

fn names(set: &DiscoveredClassSet<'_>) -> Vec<String> {
    set.iter().map(|(name, _)| name.to_string()).collect()
}

#[test]
fn breadth_first_order() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("a.Root")
                .superclass(class("a.Parent"))
                .property(prop("left", class("a.Left")))
                .property(prop("right", class("a.Right"))),
        )
        .with(ClassMetadata::new("a.Parent").superclass(class("java.lang.Object")))
        .with(ClassMetadata::new("a.Left").property(prop("deep", class("a.Deep"))))
        .with(ClassMetadata::new("a.Right"))
        .with(ClassMetadata::new("a.Deep"));

    let set = discover(&registry, &["a.Root"]).unwrap();

    assert_eq!(
        names(&set),
        vec!["a.Root", "a.Parent", "a.Left", "a.Right", "a.Deep"]
    );
    assert!(!set.contains("java.lang.Object"));
    assert_eq!(set.expanded().count(), 5);
}

#[test]
fn shared_class_visited_once() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("a.Top")
                .property(prop("x", class("a.Shared")))
                .property(prop("y", class("a.Mid")))
                .property(prop("z", TypeDescriptor::array(class("a.Shared")))),
        )
        .with(ClassMetadata::new("a.Mid").property(prop("s", class("a.Shared"))))
        .with(ClassMetadata::new("a.Shared").property(prop("top", class("a.Top"))));

    let set = discover(&registry, &["a.Top", "a.Shared"]).unwrap();

    assert_eq!(names(&set), vec!["a.Top", "a.Shared", "a.Mid"]);
}

#[test]
fn generic_arguments_and_bounds_are_followed() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("a.Holder")
                .type_parameter(TypeParameter::new("T").bound(class("a.Bound")))
                .property(prop(
                    "items",
                    TypeDescriptor::reference(
                        "java.util.Map",
                        vec![prim("string"), TypeDescriptor::reference("a.Box", vec![class("a.Item")])],
                    ),
                ))
                .property(prop("value", TypeDescriptor::generic("T"))),
        )
        .with(ClassMetadata::new("a.Bound"))
        .with(ClassMetadata::new("a.Box").type_parameter(TypeParameter::new("E")))
        .with(ClassMetadata::new("a.Item"));

    let set = discover(&registry, &["a.Holder"]).unwrap();

    assert_eq!(names(&set), vec!["a.Holder", "a.Bound", "a.Box", "a.Item"]);
}

#[test]
fn sealed_subclasses_are_followed() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::sealed("a.Shape", ["a.Circle", "a.Square"]))
        .with(ClassMetadata::new("a.Circle").superclass(class("a.Shape")))
        .with(ClassMetadata::new("a.Square").superclass(class("a.Shape")));

    let set = discover(&registry, &["a.Shape"]).unwrap();

    assert_eq!(names(&set), vec!["a.Shape", "a.Circle", "a.Square"]);
}

#[test]
fn enum_properties_are_not_followed() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("a.Holder").property(prop("color", class("a.Color"))))
        .with(
            ClassMetadata::enumeration("a.Color", ["Red"])
                .superclass(class("a.Base"))
                .property(prop("rgb", class("a.Rgb")))
                .property(prop("unknown", class("a.Missing"))),
        )
        .with(ClassMetadata::new("a.Base"))
        .with(ClassMetadata::new("a.Rgb"));

    let set = discover(&registry, &["a.Holder"]).unwrap();

    assert_eq!(names(&set), vec!["a.Holder", "a.Color"]);
}

#[test]
fn sealed_class_follows_only_its_cases() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::sealed("a.Shape", ["a.Circle"])
                .type_parameter(TypeParameter::new("T").bound(class("a.Bound")))
                .property(prop("area", class("a.Area"))),
        )
        .with(ClassMetadata::new("a.Circle").superclass(class("a.Shape")));

    let set = discover(&registry, &["a.Shape"]).unwrap();

    assert_eq!(names(&set), vec!["a.Shape", "a.Circle"]);
}

#[test]
fn excluded_superclass_is_not_recorded() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.app.Entity").superclass(class("org.lib.Entity")));
    let config = Config::new().exclude("org.lib.Entity");
    let transformers = TransformerPipeline::new();

    let set = ClassGraphWalker::new(&registry, &config, &transformers)
        .discover(["com.app.Entity"])
        .unwrap();

    assert_eq!(names(&set), vec!["com.app.Entity"]);
}

#[test]
fn hidden_members_are_not_followed() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("a.A")
            .property(
                prop("secret", class("a.Secret")).visibility(tsdecl_core::Visibility::Private),
            )
            .property(prop("shared", class("a.Static")).is_static(true)),
    );

    let set = discover(&registry, &["a.A"]).unwrap();

    assert_eq!(names(&set), vec!["a.A"]);
}

#[test]
fn unknown_root() {
    let registry = ClassRegistry::new();
    let err = discover(&registry, &["a.Nope"]).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownClass {
            class: "a.Nope".into(),
            referenced_from: None,
        }
    );
}

#[test]
fn inheritance_cycle_is_rejected() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("a.X").superclass(class("a.Y")))
        .with(ClassMetadata::new("a.Y").superclass(class("a.Z")))
        .with(ClassMetadata::new("a.Z").superclass(class("a.Y")));

    let err = discover(&registry, &["a.X"]).unwrap_err();

    assert_eq!(
        err,
        Error::CyclicSuperclass {
            chain: vec!["a.X".into(), "a.Y".into(), "a.Z".into(), "a.Y".into()],
        }
    );
    assert_eq!(err.to_string(), "cyclic superclass chain: a.X -> a.Y -> a.Z -> a.Y");
}

#[test]
fn field_cycle_is_not_an_inheritance_cycle() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("a.Child")
                .superclass(class("a.Parent"))
                .property(prop("parent", class("a.Parent"))),
        )
        .with(ClassMetadata::new("a.Parent").property(prop("children", TypeDescriptor::array(class("a.Child")))));

    let set = discover(&registry, &["a.Child"]).unwrap();

    assert_eq!(names(&set), vec!["a.Child", "a.Parent"]);
}
