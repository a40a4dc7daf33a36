
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit};

struct FieldInfo {
    ident: syn::Ident,
    ty: syn::Type,
    tag: String,
    skip: bool,
}

fn parse_field(f: &syn::Field) -> syn::Result<FieldInfo> {
    let ident = f
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(f, "NeoxStruct fields must be named"))?;
    let mut tag = String::new();
    let mut skip = false;

    for attr in &f.attrs {
        if !attr.path().is_ident("neox") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else if meta.path.is_ident("tag") {
                let value = meta.value()?;
                let expr: Expr = value.parse()?;
                match expr {
                    Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => {
                        tag = s.value();
                        Ok(())
                    }
                    other => Err(syn::Error::new_spanned(other, "expected a string literal")),
                }
            } else {
                Err(meta.error("unknown neox attribute, expected `tag = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(FieldInfo {
        ident,
        ty: f.ty.clone(),
        tag,
        skip,
    })
}

pub fn expand(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let fields = match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            _ => {
                return syn::Error::new_spanned(&ast, "NeoxStruct only supports structs with named fields")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&ast, "NeoxStruct only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let struct_name = name.to_string();
    let mut metas = Vec::new();
    let mut arms = Vec::new();

    // Indices follow declaration order, skipped fields included.
    for (index, f) in fields.into_iter().enumerate() {
        let info = match parse_field(f) {
            Ok(info) => info,
            Err(e) => return e.to_compile_error().into(),
        };
        if info.skip {
            continue;
        }
        let ident = &info.ident;
        let ty = &info.ty;
        let tag = &info.tag;
        let field_name = ident.to_string();

        metas.push(quote! {
            ::neox::core::traits::FieldMeta::of::<#ty>(#tag, #field_name, #index)
        });
        arms.push(quote! {
            #index => {
                self.#ident = <#ty as ::neox::core::traits::FromNeoxValue>::from_value(value)
                    .map_err(|e| e.with_context(format!("{}::{} (tag '{}')", #struct_name, #field_name, #tag)))?;
                Ok(())
            }
        });
    }

    let expanded = quote! {
        impl #impl_generics ::neox::core::traits::NeoxStruct for #name #ty_generics #where_clause {
            fn shape(&self) -> ::neox::core::traits::Shape {
                ::neox::core::traits::Shape::Record { name: #struct_name }
            }

            fn fields(&self) -> ::std::vec::Vec<::neox::core::traits::FieldMeta> {
                ::std::vec![#(#metas),*]
            }

            #[allow(unused_variables)]
            fn set_field(
                &mut self,
                index: usize,
                value: ::neox::core::Value,
            ) -> ::std::result::Result<(), ::neox::core::error::NeoxError> {
                match index {
                    #(#arms)*
                    _ => ::std::result::Result::Err(::neox::core::error::NeoxError::unknown_field(index, #struct_name)),
                }
            }
        }
    };

    expanded.into()
}
