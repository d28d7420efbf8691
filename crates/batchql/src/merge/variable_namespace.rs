use batchql_parser::ast::Argument;
use batchql_parser::ast::DirectiveAnnotation;
use batchql_parser::ast::FragmentDefinition;
use batchql_parser::ast::OperationDefinition;
use batchql_parser::ast::Selection;
use batchql_parser::ast::SelectionSet;

/// The name a call's variable is sent under in a merged request:
/// `c<call_index>_<name>`.
pub fn namespaced_variable(call_index: usize, name: &str) -> String {
    format!("c{call_index}_{name}")
}

/// Renames every variable declared or referenced in `operation` into the
/// namespace of `call_index`.
pub(crate) fn namespace_operation(
    operation: &mut OperationDefinition,
    call_index: usize,
) {
    let rename = |name: &str| namespaced_variable(call_index, name);
    for definition in &mut operation.variable_definitions {
        definition.name = rename(&definition.name);
        rename_in_directives(&mut definition.directives, &rename);
    }
    rename_in_directives(&mut operation.directives, &rename);
    rename_in_selection_set(&mut operation.selection_set, &rename);
}

pub(crate) fn namespace_fragment(
    fragment: &mut FragmentDefinition,
    call_index: usize,
) {
    let rename = |name: &str| namespaced_variable(call_index, name);
    rename_in_directives(&mut fragment.directives, &rename);
    rename_in_selection_set(&mut fragment.selection_set, &rename);
}

fn rename_in_selection_set(
    selection_set: &mut SelectionSet,
    rename: &impl Fn(&str) -> String,
) {
    for selection in &mut selection_set.selections {
        match selection {
            Selection::Field(field) => {
                rename_in_arguments(&mut field.arguments, rename);
                rename_in_directives(&mut field.directives, rename);
                if let Some(nested) = &mut field.selection_set {
                    rename_in_selection_set(nested, rename);
                }
            },
            Selection::FragmentSpread(spread) => {
                rename_in_directives(&mut spread.directives, rename);
            },
            Selection::InlineFragment(inline) => {
                rename_in_directives(&mut inline.directives, rename);
                rename_in_selection_set(&mut inline.selection_set, rename);
            },
        }
    }
}

fn rename_in_directives(
    directives: &mut [DirectiveAnnotation],
    rename: &impl Fn(&str) -> String,
) {
    for directive in directives {
        rename_in_arguments(&mut directive.arguments, rename);
    }
}

fn rename_in_arguments(
    arguments: &mut [Argument],
    rename: &impl Fn(&str) -> String,
) {
    for argument in arguments {
        argument.value.rename_variables(rename);
    }
}
