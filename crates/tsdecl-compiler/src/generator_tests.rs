use indoc::indoc;
use tsdecl_core::{ClassMetadata, ClassRegistry, Nullability, TypeDescriptor, TypeParameter};

use crate::test_utils::{array, class, nullable_prop, prim, prop, registry};
use crate::typegen::typescript::{self, VoidType};
use crate::{Config, Error, Generator, Location};

#[test]
fn plain_class_members() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Person")
            .superclass(class("java.lang.Object"))
            .property(prop("name", prim("string")))
            .property(prop("results", array(prim("int"))))
            .property(prop("finished", prim("boolean")))
            .property(prop("grid", array(array(prim("char"))))),
    );

    let res = Generator::new(&registry).expect_output(&["com.example.Person"]);

    insta::assert_snapshot!(res, @r"
    interface Person {
        name: string;
        results: number[];
        finished: boolean;
        grid: string[][];
    }
    ");
}

#[test]
fn nullable_member_is_optional_and_absent_union() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Results")
            .property(prop("name", prim("string")).nullability(Nullability::NonNull))
            .property(prop("results", array(prim("int"))))
            .property(nullable_prop("nextResults", array(prim("int")))),
    );

    let res = Generator::new(&registry).expect_output(&["com.example.Results"]);

    insta::assert_snapshot!(res, @r"
    interface Results {
        name: string;
        results: number[];
        nextResults?: number[] | null;
    }
    ");
}

#[test]
fn optional_wrapper_matches_nullable_member() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Person")
            .property(prop("name", prim("string")))
            .property(prop(
                "surname",
                TypeDescriptor::reference("java.util.Optional", vec![prim("string")]),
            ))
            .property(nullable_prop("nickname", prim("string"))),
    );

    let res = Generator::new(&registry).expect_output(&["com.example.Person"]);

    insta::assert_snapshot!(res, @r"
    interface Person {
        name: string;
        surname?: string | null;
        nickname?: string | null;
    }
    ");
}

#[test]
fn mutual_reference_terminates() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.example.A").property(prop("b", class("com.example.B"))))
        .with(ClassMetadata::new("com.example.B").property(nullable_prop("a", class("com.example.A"))));

    let res = Generator::new(&registry).expect_output(&["com.example.A"]);

    insta::assert_snapshot!(res, @r"
    interface A {
        b: B;
    }

    interface B {
        a?: A | null;
    }
    ");
}

#[test]
fn self_reference_through_collection() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.TreeNode")
            .property(nullable_prop("parent", class("com.example.TreeNode")))
            .property(prop(
                "children",
                TypeDescriptor::reference("java.util.List", vec![class("com.example.TreeNode")]),
            )),
    );

    let res = Generator::new(&registry).expect_output(&["com.example.TreeNode"]);

    insta::assert_snapshot!(res, @r"
    interface TreeNode {
        parent?: TreeNode | null;
        children: TreeNode[];
    }
    ");
}

#[test]
fn superclass_is_extended_and_declared() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("com.example.Derived")
                .superclass(class("com.example.Base"))
                .property(prop("name", prim("string"))),
        )
        .with(
            ClassMetadata::new("com.example.Base")
                .superclass(class("java.lang.Object"))
                .property(prop("id", prim("long"))),
        );

    let res = Generator::new(&registry).expect_output(&["com.example.Derived"]);

    insta::assert_snapshot!(res, @r"
    interface Derived extends Base {
        name: string;
    }

    interface Base {
        id: number;
    }
    ");
}

#[test]
fn generic_arguments_and_parameters() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.example.Holder").property(prop(
            "pair",
            TypeDescriptor::reference("com.example.Pair", vec![prim("string"), class("com.example.Item")]),
        )))
        .with(
            ClassMetadata::new("com.example.Pair")
                .type_parameter(TypeParameter::new("K"))
                .type_parameter(TypeParameter::new("V"))
                .property(prop("first", TypeDescriptor::generic("K")))
                .property(prop("second", TypeDescriptor::generic("V"))),
        )
        .with(ClassMetadata::new("com.example.Item"));

    let res = Generator::new(&registry).expect_output(&["com.example.Holder"]);

    insta::assert_snapshot!(res, @r"
    interface Holder {
        pair: Pair<string, Item>;
    }

    interface Pair<K, V> {
        first: K;
        second: V;
    }

    interface Item {
    }
    ");
}

#[test]
fn generic_bounds() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("com.example.Bounded")
                .type_parameter(TypeParameter::new("T").bound(class("kotlin.Any")))
                .type_parameter(
                    TypeParameter::new("U")
                        .bound(TypeDescriptor::class("java.util.List"))
                        .bound(class("com.example.Named")),
                )
                .property(prop("value", TypeDescriptor::generic("U"))),
        )
        .with(ClassMetadata::new("com.example.Named").property(prop("name", prim("string"))));

    let res = Generator::new(&registry).expect_output(&["com.example.Bounded"]);

    insta::assert_snapshot!(res, @r"
    interface Bounded<T, U extends any[] & Named> {
        value: U;
    }

    interface Named {
        name: string;
    }
    ");
}

#[test]
fn enums_sealed_classes_and_maps() {
    let json = indoc! {r#"
        { "classes": [
          { "name": "com.example.Drawing", "properties": [
            { "name": "shapes", "type": { "kind": "reference", "class": "java.util.List",
                "arguments": [ { "kind": "reference", "class": "com.example.Shape" } ] } },
            { "name": "headings", "type": { "kind": "map",
                "key": { "kind": "reference", "class": "com.example.Direction" },
                "value": { "kind": "primitive", "name": "int" } } },
            { "name": "labels", "type": { "kind": "reference", "class": "java.util.Map",
                "arguments": [ { "kind": "primitive", "name": "string" }, { "kind": "primitive", "name": "string" } ] } },
            { "name": "index", "type": { "kind": "map",
                "key": { "kind": "reference", "class": "com.example.Shape" },
                "value": { "kind": "reference", "class": "com.example.Direction" } } }
          ] },
          { "name": "com.example.Shape",
            "kind": { "type": "sealed", "subclasses": ["com.example.Circle", "com.example.Square"] } },
          { "name": "com.example.Direction",
            "kind": { "type": "enum", "constants": ["North", "West"] } },
          { "name": "com.example.Circle",
            "superclass": { "kind": "reference", "class": "com.example.Shape" },
            "properties": [ { "name": "radius", "type": { "kind": "primitive", "name": "double" } } ] },
          { "name": "com.example.Square",
            "superclass": { "kind": "reference", "class": "com.example.Shape" },
            "properties": [ { "name": "side", "type": { "kind": "primitive", "name": "double" } } ] }
        ] }
    "#};
    let registry = registry(json);

    let res = Generator::new(&registry).expect_output(&["com.example.Drawing"]);

    insta::assert_snapshot!(res, @r#"
    interface Drawing {
        shapes: Shape[];
        headings: { [key in Direction]: number };
        labels: { [key: string]: string };
        index: Map<Shape, Direction>;
    }

    type Shape = Circle | Square;

    type Direction = "North" | "West";

    interface Circle {
        radius: number;
    }

    interface Square {
        side: number;
    }
    "#);
}

#[test]
fn host_nullability_overrides_nullable_default() {
    let registry = registry(indoc! {r#"
        { "classes": [
          { "name": "com.example.User", "properties": [
            { "name": "name", "type": { "kind": "primitive", "name": "string" },
              "host_nullability": "non_null" },
            { "name": "nickname", "type": { "kind": "primitive", "name": "string" },
              "host_nullability": "nullable" },
            { "name": "legacy", "type": { "kind": "primitive", "name": "string" } }
          ] }
        ] }
    "#});

    let res = Generator::new(&registry)
        .config(Config::new().default_nullable(true))
        .expect_output(&["com.example.User"]);

    insta::assert_snapshot!(res, @r"
    interface User {
        name: string;
        nickname?: string | null;
        legacy?: string | null;
    }
    ");
}

#[test]
fn any_absorbs_absent_marker() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Envelope")
            .property(nullable_prop("payload", class("java.lang.Object")))
            .property(prop("raw", TypeDescriptor::class("java.util.List")))
            .property(prop(
                "tags",
                TypeDescriptor::reference(
                    "java.util.List",
                    vec![TypeDescriptor::nullable(prim("string"))],
                ),
            )),
    );

    let res = Generator::new(&registry).expect_output(&["com.example.Envelope"]);

    insta::assert_snapshot!(res, @r"
    interface Envelope {
        payload?: any;
        raw: any[];
        tags: (string | null)[];
    }
    ");
}

#[test]
fn emission_options() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Counter")
            .property(prop("count", prim("int")))
            .property(nullable_prop("label", prim("string"))),
    );
    let ts = typescript::Config::new()
        .export(true)
        .void_type(VoidType::Undefined)
        .int_type_name("int")
        .indent(2);

    let res = Generator::new(&registry)
        .typescript(ts)
        .expect_output(&["com.example.Counter"]);

    insta::assert_snapshot!(res, @r"
    export interface Counter {
      count: int;
      label?: string | undefined;
    }
    ");
}

#[test]
fn mappings_and_exclusions() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Event")
            .property(prop("createdAt", class("java.time.Instant")))
            .property(prop("sequence", prim("long")))
            .property(prop("source", class("com.vendor.Source")))
            .property(prop("zone", class("java.time.ZoneId"))),
    );
    let config = Config::new()
        .map("java.time.Instant", "string")
        .map("long", "bigint")
        .exclude("com.vendor.Source")
        .exclude_prefix("java.time.");

    let generator = Generator::new(&registry).config(config);
    let res = generator.expect_output(&["com.example.Event"]);

    insta::assert_snapshot!(res, @r"
    interface Event {
        createdAt: string;
        sequence: bigint;
        source: Source;
        zone: ZoneId;
    }
    ");

    let discovered = generator.discover(["com.example.Event"]).unwrap();
    assert_eq!(
        discovered.excluded().collect::<Vec<_>>(),
        vec!["java.time.Instant", "com.vendor.Source", "java.time.ZoneId"]
    );
}

#[test]
fn individual_declarations_exposed() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.example.A").property(prop("b", class("com.example.B"))))
        .with(ClassMetadata::enumeration("com.example.B", ["X"]));

    let emission = Generator::new(&registry).generate(["com.example.A"]).unwrap();

    let names: Vec<_> = emission.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(emission.declarations[1].class, "com.example.B");
    assert_eq!(emission.declarations[1].text, r#"type B = "X";"#);
    assert_eq!(
        emission.text,
        format!("{}\n\n{}\n", emission.declarations[0].text, emission.declarations[1].text)
    );
}

#[test]
fn output_is_deterministic() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("com.example.A")
                .property(prop("b", class("com.example.B")))
                .property(prop("c", class("com.example.C"))),
        )
        .with(ClassMetadata::new("com.example.B").property(prop("c", class("com.example.C"))))
        .with(ClassMetadata::new("com.example.C").property(prop("a", class("com.example.A"))));
    let generator = Generator::new(&registry);

    let first = generator.expect_output(&["com.example.A"]);
    let second = generator.expect_output(&["com.example.A"]);
    assert_eq!(first, second);

    let discovered = generator.discover(["com.example.A"]).unwrap();
    let classes = generator.map(&discovered).unwrap();
    assert_eq!(generator.emit(&classes).unwrap(), generator.emit(&classes).unwrap());
}

#[test]
fn independent_runs_share_one_registry_across_threads() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.example.A").property(prop("b", class("com.example.B"))))
        .with(ClassMetadata::new("com.example.B").property(prop("a", class("com.example.A"))));

    let (left, right) = std::thread::scope(|s| {
        let left = s.spawn(|| Generator::new(&registry).expect_output(&["com.example.A"]));
        let right = s.spawn(|| Generator::new(&registry).expect_output(&["com.example.B"]));
        (left.join().unwrap(), right.join().unwrap())
    });

    insta::assert_snapshot!(left, @r"
    interface A {
        b: B;
    }

    interface B {
        a: A;
    }
    ");
    insta::assert_snapshot!(right, @r"
    interface B {
        a: A;
    }

    interface A {
        b: B;
    }
    ");
}

#[test]
fn no_roots_no_output() {
    let registry = ClassRegistry::new();
    let emission = Generator::new(&registry).generate(Vec::<String>::new()).unwrap();
    assert!(emission.declarations.is_empty());
    assert_eq!(emission.text, "");
}

#[test]
fn unsupported_primitive_is_fatal() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Bad")
            .property(prop("ok", prim("string")))
            .property(prop("id", prim("uuid"))),
    );

    let err = Generator::new(&registry).expect_error(&["com.example.Bad"]);

    assert_eq!(
        err,
        Error::UnsupportedType {
            type_name: "uuid".into(),
            location: Some(Location::member("com.example.Bad", "id")),
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported type `uuid` (in `com.example.Bad.id`)"
    );
}

#[test]
fn nested_function_type_is_unsupported() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.example.Widget")
            .property(prop("onClick", TypeDescriptor::Function))
            .property(prop("handlers", array(TypeDescriptor::Function))),
    );

    let err = Generator::new(&registry).expect_error(&["com.example.Widget"]);

    assert_eq!(
        err.to_string(),
        "unsupported type `function` (in `com.example.Widget.handlers`)"
    );
}

#[test]
fn name_collision_is_fatal() {
    let registry = ClassRegistry::new()
        .with(
            ClassMetadata::new("com.example.Holder")
                .property(prop("a", class("com.a.Item")))
                .property(prop("b", class("com.b.Item"))),
        )
        .with(ClassMetadata::new("com.a.Item"))
        .with(ClassMetadata::new("com.b.Item"));

    let err = Generator::new(&registry).expect_error(&["com.example.Holder"]);

    assert_eq!(
        err.to_string(),
        "type name `Item` is produced by both `com.a.Item` and `com.b.Item`"
    );
}

#[test]
fn excluded_class_named_like_declared_class_is_fatal() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.app.Source").property(prop("vendor", class("com.vendor.Source"))),
    );

    let err = Generator::new(&registry)
        .config(Config::new().exclude("com.vendor.Source"))
        .expect_error(&["com.app.Source"]);

    assert_eq!(
        err,
        Error::NameCollision {
            name: "Source".into(),
            first: "com.app.Source".into(),
            second: "com.vendor.Source".into(),
        }
    );
}

#[test]
fn mapped_class_does_not_claim_its_simple_name() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.app.Source").property(prop("vendor", class("com.vendor.Source"))),
    );
    let config = Config::new()
        .exclude("com.vendor.Source")
        .map("com.vendor.Source", "VendorSource");

    let res = Generator::new(&registry)
        .config(config)
        .expect_output(&["com.app.Source"]);

    insta::assert_snapshot!(res, @r"
    interface Source {
        vendor: VendorSource;
    }
    ");
}

#[test]
fn excluded_superclass_with_same_name() {
    let registry = ClassRegistry::new().with(
        ClassMetadata::new("com.app.Entity")
            .superclass(class("org.lib.Entity"))
            .property(prop("id", prim("long"))),
    );

    let res = Generator::new(&registry)
        .config(Config::new().exclude("org.lib.Entity"))
        .expect_output(&["com.app.Entity"]);

    insta::assert_snapshot!(res, @r"
    interface Entity {
        id: number;
    }
    ");
}

#[test]
fn enum_properties_produce_no_declarations() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.example.Holder").property(prop("color", class("com.example.Color"))))
        .with(
            ClassMetadata::enumeration("com.example.Color", ["Red"])
                .property(prop("rgb", class("com.example.Rgb"))),
        )
        .with(ClassMetadata::new("com.example.Rgb"));

    let res = Generator::new(&registry).expect_output(&["com.example.Holder"]);

    insta::assert_snapshot!(res, @r#"
    interface Holder {
        color: Color;
    }

    type Color = "Red";
    "#);
}

#[test]
fn unknown_class_is_fatal() {
    let registry = ClassRegistry::new()
        .with(ClassMetadata::new("com.example.Holder").property(prop("m", class("com.example.Missing"))));

    let err = Generator::new(&registry).expect_error(&["com.example.Holder"]);

    assert_eq!(
        err,
        Error::UnknownClass {
            class: "com.example.Missing".into(),
            referenced_from: Some("com.example.Holder".into()),
        }
    );
    assert_eq!(
        err.to_string(),
        "unknown class `com.example.Missing` (referenced from `com.example.Holder`)"
    );
}
