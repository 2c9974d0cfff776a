//! Integration tests for the source-emitting backend.
//!
//! The emitter is pure text generation, so these tests build small
//! component trees by hand and assert on the emitted statements: binding
//! order, naming parity between the two passes, default elision, and the
//! leniency policy for authoring mistakes.

use pretty_assertions::assert_eq;

use viewforge::model::{
    ComponentDefinition, Constraint, ConstraintPriority, ConstraintRelation, ConstraintTarget,
    ElementKind, ElementNode, LayoutAnchor, PerAxis, Property, PropertyValue, RectEdge, Style,
    TargetRef,
};
use viewforge::{emit_component, EmitOptions};

fn emit(definition: &ComponentDefinition) -> String {
    emit_component(definition, EmitOptions::default())
}

#[test]
fn test_empty_component_full_output() {
    let definition = ComponentDefinition::new("Tiny", vec![]);
    let expected = "\
extension Tiny: DeclarativeUI {

    var ui: Tiny.UIContainer {
        return ViewForge.associatedObject(self, key: &Tiny.UIContainer.associatedObjectKey) {
            return Tiny.UIContainer(target: self)
        }
    }

    var __ui: ViewForge.DeclarativeUIContainer {
        return ui
    }

    final class UIContainer: ViewForge.DeclarativeUIContainer {
        fileprivate static var associatedObjectKey = 0 as UInt8

        var sourcePath: String {
            return \"\"
        }

        var typeName: String {
            return \"Tiny\"
        }

        let constraints = Tiny.LayoutContainer()

        private weak var target: Tiny?

        fileprivate init(target: Tiny) {
            self.target = target
        }

        func setupUI() {
            guard let target = self.target else { return }
        }

        static func destroyUI(target: UIView) {
        }
    }

    final class LayoutContainer {
    }
    struct Styles {
    }
}
";
    assert_eq!(emit(&definition), expected);
}

#[test]
fn test_synthesized_names_match_across_both_passes() {
    let definition = ComponentDefinition::new(
        "Gallery",
        vec![
            ElementNode::new(ElementKind::Label),
            ElementNode::new(ElementKind::Label),
        ],
    );
    let source = emit(&definition);

    // Construction pass.
    assert!(source.contains("let temp_Label_1 = UILabel()"));
    assert!(source.contains("let temp_Label_2 = UILabel()"));
    // Constraint pass recomputes the same names from a fresh counter.
    assert!(source.contains("temp_Label_1.snp.makeConstraints {"));
    assert!(source.contains("temp_Label_2.snp.makeConstraints {"));
}

#[test]
fn test_constant_and_parent_constraint_scenario() {
    let box_node = ElementNode::new(ElementKind::View)
        .with_layout_id("box")
        .with_constraint(Constraint::equal(
            LayoutAnchor::Width,
            ConstraintTarget::Constant(100.0),
        ))
        .with_constraint(Constraint::equal(
            LayoutAnchor::Height,
            ConstraintTarget::Targeted {
                target: TargetRef::Parent,
                anchor: Some(LayoutAnchor::Height),
                offset: 10.0,
                multiplier: 0.5,
            },
        ));
    let definition = ComponentDefinition::new("Gallery", vec![box_node]);
    let source = emit(&definition);

    assert!(source.contains("let named_box = UIView()"));
    // Constant target, no modifier clauses at all.
    assert!(source.contains("make.width.equalTo(100)\n"));
    // Same-anchor parent target collapses to the bare parent name.
    assert!(source.contains("make.height.equalTo(target).offset(10).multipliedBy(0.5)\n"));
}

#[test]
fn test_explicit_priority_clause_appears() {
    let node = ElementNode::new(ElementKind::View).with_constraint(
        Constraint::equal(LayoutAnchor::Width, ConstraintTarget::Constant(150.0))
            .with_priority(ConstraintPriority::High),
    );
    let definition = ComponentDefinition::new("Gallery", vec![node]);
    let source = emit(&definition);
    assert!(source.contains("make.width.equalTo(150).priority(750)\n"));
}

#[test]
fn test_relations_and_differing_target_anchor() {
    let node = ElementNode::new(ElementKind::Button)
        .with_constraint(
            Constraint::equal(
                LayoutAnchor::Top,
                ConstraintTarget::Targeted {
                    target: TargetRef::LayoutId("box".into()),
                    anchor: Some(LayoutAnchor::Bottom),
                    offset: 0.0,
                    multiplier: 1.0,
                },
            )
            .with_relation(ConstraintRelation::GreaterThanOrEqual),
        )
        .with_constraint(
            Constraint::equal(LayoutAnchor::Width, ConstraintTarget::Constant(44.0))
                .with_relation(ConstraintRelation::LessThanOrEqual),
        );
    let definition = ComponentDefinition::new(
        "Gallery",
        vec![ElementNode::new(ElementKind::View).with_layout_id("box"), node],
    );
    let source = emit(&definition);
    assert!(source.contains("make.top.greaterThanOrEqualTo(named_box.snp.bottom)\n"));
    assert!(source.contains("make.width.lessThanOrEqualTo(44)\n"));
}

#[test]
fn test_dangling_field_reference_emits_without_error() {
    // The emitter cannot know the field does not exist; the reference is
    // emitted verbatim and left to the downstream compiler.
    let node = ElementNode::new(ElementKind::View).with_constraint(Constraint::equal(
        LayoutAnchor::CenterX,
        ConstraintTarget::to(TargetRef::Field("header".into())),
    ));
    let definition = ComponentDefinition::new("Gallery", vec![node]);
    let source = emit(&definition);
    assert!(source.contains("make.centerX.equalTo(target.header)\n"));
}

#[test]
fn test_axis_priorities_only_for_explicit_axes() {
    let mut node = ElementNode::new(ElementKind::Label);
    node.layout.compression = PerAxis::new(Some(ConstraintPriority::High), None);
    node.layout.hugging = PerAxis::new(None, Some(ConstraintPriority::Custom(300.0)));
    let definition = ComponentDefinition::new("Gallery", vec![node]);
    let source = emit(&definition);

    assert!(source
        .contains("temp_Label_1.setContentCompressionResistancePriority(750, for: .horizontal)"));
    assert!(!source.contains("setContentCompressionResistancePriority(750, for: .vertical)"));
    assert!(source.contains("temp_Label_1.setContentHuggingPriority(300, for: .vertical)"));
    assert!(!source.contains("setContentHuggingPriority(300, for: .horizontal)"));
}

#[test]
fn test_style_and_property_application_order() {
    let node = ElementNode::new(ElementKind::Label)
        .with_style("base")
        .with_style(":common:accent")
        .with_property(Property::new("numberOfLines", PropertyValue::Number(2.0)));
    let definition = ComponentDefinition::new("Card", vec![node]);
    let source = emit(&definition);

    let base = source
        .find("temp_Label_1.apply(style: Styles.base)")
        .expect("local style application");
    let accent = source
        .find("temp_Label_1.apply(style: CommonStyles.accent)")
        .expect("global style application");
    let property = source
        .find("temp_Label_1.numberOfLines = 2")
        .expect("direct property");
    let attach = source
        .find("target.addSubview(temp_Label_1)")
        .expect("attachment");
    assert!(base < accent && accent < property && property < attach);
}

#[test]
fn test_stack_view_children_use_arranged_attachment() {
    let stack = ElementNode::new(ElementKind::StackView)
        .with_child(ElementNode::new(ElementKind::Button));
    let definition = ComponentDefinition::new("Toolbar", vec![stack]);
    let source = emit(&definition);
    assert!(source.contains("target.addSubview(temp_StackView_1)"));
    assert!(source.contains("temp_StackView_1.addArrangedSubview(temp_Button_1)"));
}

#[test]
fn test_nested_constraints_use_enclosing_identity_as_parent() {
    let child = ElementNode::new(ElementKind::Label).with_constraint(Constraint::equal(
        LayoutAnchor::Leading,
        ConstraintTarget::to(TargetRef::Parent),
    ));
    let parent = ElementNode::new(ElementKind::View)
        .with_layout_id("card")
        .with_child(child);
    let definition = ComponentDefinition::new("Feed", vec![parent]);
    let source = emit(&definition);
    assert!(source.contains("make.leading.equalTo(named_card)\n"));
}

#[test]
fn test_constraint_result_fields_flow_through_unit() {
    let node = ElementNode::new(ElementKind::View).with_constraint(
        Constraint::equal(LayoutAnchor::Top, ConstraintTarget::to(TargetRef::Parent))
            .with_field("topConstraint"),
    );
    let definition = ComponentDefinition::new("Card", vec![node]);
    let source = emit_component(
        &definition,
        EmitOptions {
            source_path: "components/Card.ui.xml".into(),
            live_enabled: true,
        },
    );

    assert!(source
        .contains("constraints.topConstraint = make.top.equalTo(target).constraint"));
    assert!(source.contains("fileprivate(set) var topConstraint: SnapKit.Constraint?"));
    // Live registration switch binds the field at reload time.
    assert!(source.contains("case \"topConstraint\":"));
    assert!(source.contains("    constraints.topConstraint = constraint"));
    assert!(source.contains("return \"components/Card.ui.xml\""));
}

#[test]
fn test_root_view_and_styles_emission() {
    let definition = ComponentDefinition::new("LoginScreen", vec![])
        .root_view(true)
        .with_extended_edges(vec![RectEdge::Top, RectEdge::Bottom])
        .with_styles(vec![
            Style::new(
                "title",
                vec![Property::new("textAlignment", PropertyValue::Token("center".into()))],
            )
            .for_kind(ElementKind::Label),
            Style::new(
                "card",
                vec![Property::new("clipsToBounds", PropertyValue::Bool(true))],
            )
            .extending(vec!["title".into()]),
        ]);
    let source = emit(&definition);

    assert!(source.contains("extension LoginScreen: DeclarativeUI, RootView {"));
    assert!(source.contains("return [.top, .bottom]"));
    assert!(source.contains("static func title(_ view: UILabel) {"));
    assert!(source.contains("view.textAlignment = .center"));
    // Extended styles are applied before the style's own properties.
    assert!(source.contains("static func card(_ view: UIView) {"));
    let extended = source.find("Styles.title(view)").expect("extension call");
    let own = source
        .find("view.clipsToBounds = true")
        .expect("own property");
    assert!(extended < own);
}

#[test]
fn test_malformed_style_reference_is_skipped_with_diagnostic() {
    let node = ElementNode::new(ElementKind::View)
        .with_style(":broken")
        .with_style("valid");
    let definition = ComponentDefinition::new("Card", vec![node]);
    let source = emit(&definition);
    assert!(source.contains("// style reference `:broken` has wrong format"));
    // Generation continues with the remaining references.
    assert!(source.contains("temp_View_1.apply(style: Styles.valid)"));
}
