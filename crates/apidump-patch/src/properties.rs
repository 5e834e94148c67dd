//! Property tests tying the differ, patcher, and inverter together.

use apidump_diff::{diff, Action, Payload, Target};
use apidump_types::{
    Callback, Class, Enum, EnumItem, Event, Function, Member, MemberKind, Parameter, Property,
    Root, Tags, Type,
};
use proptest::prelude::*;

use crate::inverse::inverse;
use crate::patcher::patch;

const CLASS_NAMES: &[&str] = &["Instance", "Part", "Model", "Tool", "Sound"];
const MEMBER_NAMES: &[&str] = &["Name", "Parent", "Activate", "Changed"];
const ENUM_NAMES: &[&str] = &["Material", "Axis", "Font"];
const ITEM_NAMES: &[&str] = &["Wood", "Slate", "X", "Y"];

fn arb_type() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::new("int")),
        Just(Type::new("bool")),
        Just(Type::with_category("Class", "Instance")),
    ]
}

fn arb_tags() -> impl Strategy<Value = Tags> {
    proptest::sample::subsequence(vec!["Deprecated", "Hidden", "ReadOnly"], 0..=3)
        .prop_map(|tags| tags.into_iter().collect())
}

fn arb_security() -> impl Strategy<Value = String> {
    prop_oneof![Just("None".to_string()), Just("PluginSecurity".to_string())]
}

fn arb_parameters(defaults: bool) -> impl Strategy<Value = Vec<Parameter>> {
    proptest::collection::vec(
        (
            arb_type(),
            prop_oneof![Just("count"), Just("label")],
            proptest::option::of(Just("1")),
        ),
        0..3,
    )
    .prop_map(move |params| {
        params
            .into_iter()
            .map(|(ty, name, default)| {
                let param = Parameter::new(ty, name);
                match default {
                    Some(default) if defaults => param.with_default(default),
                    _ => param,
                }
            })
            .collect()
    })
}

fn arb_member(name: &'static str, kind: MemberKind) -> BoxedStrategy<Member> {
    match kind {
        MemberKind::Property => (arb_type(), arb_security(), any::<bool>(), arb_tags())
            .prop_map(move |(value_type, security, can_load, tags)| {
                Member::Property(Property {
                    name: name.to_string(),
                    value_type,
                    read_security: security.clone(),
                    write_security: security,
                    can_load,
                    can_save: !can_load,
                    tags,
                })
            })
            .boxed(),
        MemberKind::Function => (arb_parameters(true), arb_type(), arb_security(), arb_tags())
            .prop_map(move |(parameters, return_type, security, tags)| {
                Member::Function(Function {
                    name: name.to_string(),
                    parameters,
                    return_type,
                    security,
                    tags,
                })
            })
            .boxed(),
        MemberKind::Event => (arb_parameters(false), arb_security(), arb_tags())
            .prop_map(move |(parameters, security, tags)| {
                Member::Event(Event {
                    name: name.to_string(),
                    parameters,
                    security,
                    tags,
                })
            })
            .boxed(),
        MemberKind::Callback => (arb_parameters(false), arb_type(), arb_security(), arb_tags())
            .prop_map(move |(parameters, return_type, security, tags)| {
                Member::Callback(Callback {
                    name: name.to_string(),
                    parameters,
                    return_type,
                    security,
                    tags,
                })
            })
            .boxed(),
    }
}

fn arb_class(name: &'static str) -> impl Strategy<Value = Class> {
    let ids = (0..MEMBER_NAMES.len(), 0..MemberKind::ALL.len());
    let members = proptest::collection::btree_set(ids, 0..5).prop_flat_map(|ids| {
        ids.into_iter()
            .map(|(n, k)| arb_member(MEMBER_NAMES[n], MemberKind::ALL[k]))
            .collect::<Vec<_>>()
    });
    (
        prop_oneof![Just(""), Just("Instance"), Just("Missing")],
        prop_oneof![Just(""), Just("Instances")],
        members,
        arb_tags(),
    )
        .prop_map(move |(superclass, memory_category, members, tags)| Class {
            name: name.to_string(),
            superclass: superclass.to_string(),
            memory_category: memory_category.to_string(),
            members,
            tags,
        })
}

fn arb_enum(name: &'static str) -> impl Strategy<Value = Enum> {
    let items = proptest::collection::btree_set(0..ITEM_NAMES.len(), 0..4).prop_flat_map(|ids| {
        ids.into_iter()
            .map(|i| {
                (0..3i64, 0..3i64, arb_tags()).prop_map(move |(value, index, tags)| EnumItem {
                    name: ITEM_NAMES[i].to_string(),
                    value,
                    index,
                    tags,
                })
            })
            .collect::<Vec<_>>()
    });
    (items, arb_tags()).prop_map(move |(items, tags)| Enum {
        name: name.to_string(),
        items,
        tags,
    })
}

fn arb_root() -> impl Strategy<Value = Root> {
    let classes = proptest::collection::btree_set(0..CLASS_NAMES.len(), 0..4).prop_flat_map(|ids| {
        ids.into_iter()
            .map(|i| arb_class(CLASS_NAMES[i]))
            .collect::<Vec<_>>()
    });
    let enums = proptest::collection::btree_set(0..ENUM_NAMES.len(), 0..3).prop_flat_map(|ids| {
        ids.into_iter()
            .map(|i| arb_enum(ENUM_NAMES[i]))
            .collect::<Vec<_>>()
    });
    (classes, enums).prop_map(|(classes, enums)| Root { classes, enums })
}

proptest! {
    #[test]
    fn patch_reproduces_target(a in arb_root(), b in arb_root()) {
        let actions = diff(Some(&a), Some(&b));
        let mut patched = a.clone();
        let report = patch(&mut patched, &actions);
        prop_assert!(report.is_clean(), "skipped: {:?}", report.skipped);
        prop_assert_eq!(patched.sorted(), b.sorted());
    }

    #[test]
    fn inverse_restores_origin(a in arb_root(), b in arb_root()) {
        let actions = diff(Some(&a), Some(&b));
        let undo = inverse(&actions, &a);
        let mut patched = a.clone();
        patch(&mut patched, &actions);
        let report = patch(&mut patched, &undo);
        prop_assert!(report.is_clean(), "skipped: {:?}", report.skipped);
        prop_assert_eq!(patched.sorted(), a.sorted());
    }

    #[test]
    fn self_diff_is_empty(a in arb_root()) {
        prop_assert!(diff(Some(&a), Some(&a)).is_empty());
    }

    #[test]
    fn whole_entity_add_and_remove_are_idempotent(a in arb_root(), class in arb_class("Widget")) {
        let add = Action::add(Target::class("Widget"), Payload::Class(class));
        let remove = Action::Remove { target: Target::class("Widget"), payload: None };

        let mut once = a.clone();
        patch(&mut once, std::slice::from_ref(&add));
        let mut twice = a.clone();
        patch(&mut twice, &[add.clone(), add]);
        prop_assert_eq!(&once, &twice);

        patch(&mut once, std::slice::from_ref(&remove));
        patch(&mut twice, &[remove.clone(), remove]);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, a);
    }
}
