//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Build a compile error at the macro call site.
fn call_site_error(message: &str) -> TokenStream {
    Error::new(proc_macro2::Span::call_site(), message)
        .to_compile_error()
        .into()
}

/// Implement `aoc_framework::runner::SolutionRunner` for a struct or the type of an impl block.
///
/// The generated `run` picks the `aoc_framework::runner::solve_*` function matching the given
/// properties, forwarding the input, handler and `RunOptions`.
///
/// # Properties
///
/// - `name` (required): expression evaluating to `&str`, displayed as the solution's name.
/// - `part_one` (required): type implementing `Solution<PartOne>`.
/// - `part_two`: type implementing `Solution<PartTwo>`. Without it only part one runs.
/// - `parsed`: type implementing `ParseData`. Without it both parts solve from `str`.
///
/// # Errors
///
/// A compile error is produced for an item that isn't a struct or impl block, a missing required
/// property, a repeated property, or an unknown property.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 1: No Time for a Taxicab", part_one = Day01)]
/// struct Day01Runner;
/// ```
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 3: Squares With Three Sides",
///     parsed = SideRows,
///     part_one = Day03,
///     part_two = Day03
/// )]
/// impl super::AdventOfCode2016<3> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut name_expr_opt: Option<Expr> = None;
    let mut parsed_ty_opt: Option<Type> = None;
    let mut part_one_ty_opt: Option<Type> = None;
    let mut part_two_ty_opt: Option<Type> = None;

    let solution_runner_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            if name_expr_opt.is_some() {
                return Err(meta.error("duplicate 'name' property"));
            }
            name_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("parsed") {
            if parsed_ty_opt.is_some() {
                return Err(meta.error("duplicate 'parsed' property"));
            }
            parsed_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_one") {
            if part_one_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_one' property"));
            }
            part_one_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_two") {
            if part_two_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_two' property"));
            }
            part_two_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with solution_runner_parser);

    let Some(name_expr) = name_expr_opt else {
        return call_site_error("missing required property: 'name'");
    };
    let Some(part_one_ty) = part_one_ty_opt else {
        return call_site_error("missing required property: 'part_one'");
    };

    let solve_function_call = match (parsed_ty_opt, part_two_ty_opt) {
        (None, None) => quote! {
            aoc_framework::runner::solve_half_solution::<#part_one_ty>(
                #name_expr,
                input,
                handler,
                options
            )
        },
        (None, Some(part_two_ty)) => quote! {
            aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                #name_expr,
                input,
                handler,
                options
            )
        },
        (Some(parsed_ty), None) => quote! {
            aoc_framework::runner::solve_parsed_half_solution::<#parsed_ty, #part_one_ty>(
                #name_expr,
                input,
                handler,
                options
            )
        },
        (Some(parsed_ty), Some(part_two_ty)) => quote! {
            aoc_framework::runner::solve_parsed_full_solution::<
                #parsed_ty,
                #part_one_ty,
                #part_two_ty
            >(#name_expr, input, handler, options)
        },
    };

    // the item is re-emitted unchanged, so keep the tokens before parsing consumes them
    let original_input = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return call_site_error(
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            );
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                options: aoc_framework::runner::RunOptions
            ) -> aoc_framework::DynamicResult<()> {
                #solve_function_call
            }
        }
    })
}
