use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, Ident};

/// Member kinds accepted in `#[describe(...)]`.
const MEMBER_KINDS: &[&str] = &["trivial", "nothrow", "throwing", "deleted", "undeclared"];

struct Members {
    copy_ctor: Ident,
    move_ctor: Ident,
    dtor: Ident,
    is_abstract: bool,
    is_final: bool,
}

fn parse_kind(meta: &syn::meta::ParseNestedMeta, allow_undeclared: bool) -> syn::Result<Ident> {
    let value: Ident = meta.value()?.parse()?;
    let name = value.to_string();
    if !MEMBER_KINDS.contains(&name.as_str()) {
        return Err(syn::Error::new(
            value.span(),
            format!("expected one of {}", MEMBER_KINDS.join(", ")),
        ));
    }
    if name == "undeclared" && !allow_undeclared {
        return Err(syn::Error::new(
            value.span(),
            "only the move constructor can be undeclared",
        ));
    }
    Ok(value)
}

fn parse_members(input: &DeriveInput) -> syn::Result<Members> {
    let trivial = || Ident::new("trivial", proc_macro2::Span::call_site());
    let mut members = Members {
        copy_ctor: trivial(),
        move_ctor: trivial(),
        dtor: trivial(),
        is_abstract: false,
        is_final: false,
    };

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("describe")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("copy_ctor") {
                members.copy_ctor = parse_kind(&meta, false)?;
            } else if meta.path.is_ident("move_ctor") {
                members.move_ctor = parse_kind(&meta, true)?;
            } else if meta.path.is_ident("dtor") {
                members.dtor = parse_kind(&meta, false)?;
            } else if meta.path.is_ident("is_abstract") {
                members.is_abstract = true;
            } else if meta.path.is_ident("is_final") {
                members.is_final = true;
            } else {
                return Err(meta.error(
                    "expected `copy_ctor`, `move_ctor`, `dtor`, `is_abstract` or `is_final`",
                ));
            }
            Ok(())
        })?;
    }
    Ok(members)
}

/// `trivial` -> (`Trivial` member-kind type, `Member::Trivial` record value)
fn kind_tokens(kind: &Ident) -> (TokenStream2, TokenStream2) {
    let name = kind.to_string();
    let mut chars = name.chars();
    let camel = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => name,
    };
    let ident = format_ident!("{}", camel, span = kind.span());
    (
        quote! { ::tola_traits::descriptor::member::#ident },
        quote! { ::tola_traits::descriptor::Member::#ident },
    )
}

fn flag(value: bool) -> TokenStream2 {
    if value {
        quote! { ::tola_traits::primitives::True }
    } else {
        quote! { ::tola_traits::primitives::False }
    }
}

/// #[derive(Describe)] generates a call to the declarative macro bridge.
///
/// The bridge spells out both trait impls with `$crate` paths, and
/// `concat!(module_path!(), ...)` is expanded at the use site so the record
/// name carries the full path.
pub fn expand_derive_describe(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Describe)] does not support generic types; implement `Describe` through the descriptor forms instead",
        ));
    }

    let ident = &input.ident;
    let members = parse_members(&input)?;

    let (copy_ty, copy_val) = kind_tokens(&members.copy_ctor);
    let (move_ty, move_val) = kind_tokens(&members.move_ctor);
    let (dtor_ty, dtor_val) = kind_tokens(&members.dtor);
    let is_abstract = members.is_abstract;
    let is_final = members.is_final;
    let abstract_ty = flag(is_abstract);
    let final_ty = flag(is_final);

    // A trivial copy is a bitwise copy; in Rust that is `Copy`.
    let copy_check = (members.copy_ctor == "trivial").then(|| {
        quote! {
            const _: () = {
                const fn descriptor_claims_trivial_copy<T: ::core::marker::Copy>() {}
                descriptor_claims_trivial_copy::<#ident>()
            };
        }
    });

    Ok(quote! {
        ::tola_traits::__impl_describe! {
            [] #ident,
            info: ::tola_traits::descriptor::TypeInfo::class(
                concat!(module_path!(), "::", stringify!(#ident)),
                ::tola_traits::descriptor::Members::new(#copy_val, #move_val, #dtor_val),
            )
            .abstract_if(#is_abstract)
            .final_if(#is_final),
            copy_ctor: #copy_ty,
            move_ctor: #move_ty,
            dtor: #dtor_ty,
            is_abstract: #abstract_ty,
            is_final: #final_ty,
        }

        #copy_check
    })
}
