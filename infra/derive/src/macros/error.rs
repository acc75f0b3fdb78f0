use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, PathSegment, Type, Variant,
};

const INTERNAL: &str = "Internal";

/// What the expansion needs to know about one enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<Attribute>,
}

impl ErrorVariant<'_> {
    fn is_internal(&self) -> bool {
        self.ident == INTERNAL
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "evohub_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<Result<Vec<_>, _>>()
    {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };
    if let Some(orphan) = variants.iter().find(|v| v.source.is_some() && !v.has_context) {
        return syn::Error::new_spanned(
            orphan.ident,
            "evohub_error requires `context: Option<Cow<'static, str>>` on variants with a source",
        )
        .to_compile_error();
    }

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = match missing_derives(&input.attrs) {
        Ok(derives) => derives,
        Err(err) => return err.to_compile_error(),
    };
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants
        .iter()
        .filter(|v| !v.is_internal())
        .filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = variants.iter().find(|v| v.is_internal()).map(|v| internal_impls(name, v));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "evohub_error requires named fields for source/context handling",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = source_field(fields).and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));
    let cfg = variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect();

    Ok(ErrorVariant { ident: &variant.ident, source, has_context, cfg })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) =
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|ident| ident == "context"))
    else {
        return Ok(None);
    };

    if is_optional_static_cow_str(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|ident| ident == "source")
            || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
    })
}

fn missing_derives(attrs: &[Attribute]) -> syn::Result<TokenStream> {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        })?;
    }

    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }

    Ok(if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } })
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ErrorVariant { ident, cfg, .. } = v;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, variant: &ErrorVariant<'_>) -> Option<TokenStream> {
    let (field, ty) = variant.source?;
    let ErrorVariant { ident, cfg, .. } = variant;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#ident { #field, context: None }
            }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variant: &ErrorVariant<'_>) -> TokenStream {
    let cfg = &variant.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// Matches `Option<Cow<'static, str>>`, allowing any path prefix on each segment.
fn is_optional_static_cow_str(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|s| s.ident == "Option") else {
        return false;
    };
    let Some(GenericArgument::Type(cow_ty)) = angle_args(option).and_then(|mut a| a.next()) else {
        return false;
    };
    let Some(cow) = last_segment(cow_ty).filter(|s| s.ident == "Cow") else {
        return false;
    };
    let Some(mut args) = angle_args(cow) else {
        return false;
    };

    let static_lifetime =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_target = matches!(
        args.next(),
        Some(GenericArgument::Type(inner)) if last_segment(inner).is_some_and(|s| s.ident == "str")
    );

    static_lifetime && str_target
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn angle_args(segment: &PathSegment) -> Option<impl Iterator<Item = &GenericArgument>> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(args.args.iter()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn existing_derives_are_not_repeated() {
        let input: DeriveInput = parse_quote! {
            #[derive(Debug, thiserror::Error)]
            enum Sample {}
        };
        assert!(missing_derives(&input.attrs).is_ok_and(|derives| derives.is_empty()));
    }

    #[test]
    fn malformed_derive_list_is_a_compile_error() {
        let input: DeriveInput = parse_quote! {
            #[derive("Debug")]
            enum Sample {
                #[error("sample")]
                Failed { context: Option<::std::borrow::Cow<'static, str>> },
            }
        };
        assert!(missing_derives(&input.attrs).is_err());
        assert!(expand(input).to_string().contains("compile_error"));
    }
}
