//! Documentation-summary templatifier
//!
//! Converts extracted documentation-summary trees into the render-tree.
//! Each summary type maps to exactly one render-tree node type. Member
//! ordering is a presentation contract: namespace members sort by name,
//! signatures by their ordering index, params by position — and every
//! collection is filtered through the inclusion predicate before
//! recursion.

use weavemark_ast::summary::{
    CallableSummary, ClassSummary, Crossref, CrossrefSummary, DocText, LiteralValue,
    MemberSummary, ModuleSummary, ParamSummary, RetvalSummary, SignatureSummary, SpecialForm,
    SummaryMetadata, SummaryRef, TypeExpr, TypeSpec, VariableSummary,
};

use crate::documents::TemplateHost;
use crate::error::{RenderError, Result};
use crate::plugins::collect_summary_injections;
use crate::template::{
    BlockTemplate, CallableTemplate, ClassTemplate, CrossrefTarget, CrossrefTemplate,
    GenericElement, HtmlAttr, ModuleTemplate, ParamTemplate, RetvalTemplate, SignatureTemplate,
    TemplateNode, TypespecTemplate, VariableTemplate, PRE_CLASSNAME,
};
use crate::transform::TransformContext;

/// Markup language tags this templatifier can hand to the preprocessor.
fn is_weavemark_lang(lang: &str) -> bool {
    matches!(lang, "weavemark" | "wm")
}

/// Inclusion predicate for summary collections.
///
/// An explicit override from the extraction always wins; otherwise a
/// member is included iff it was flagged document-worthy and not
/// explicitly disowned.
pub fn should_include(metadata: &SummaryMetadata) -> bool {
    match metadata.inclusion_override {
        Some(include) => include,
        None => metadata.document_worthy && !metadata.disowned,
    }
}

/// Templatify a piece of documentation text.
///
/// Text with no markup language renders as a preformatted code element.
/// Text in the weavemark markup language is preprocessed through the
/// collection (transformer chain included, with the owning summary's
/// metadata as context) and templatified as a document.
pub fn templatify_doctext(
    doctext: &DocText,
    host: &dyn TemplateHost,
    metadata: &SummaryMetadata,
) -> Result<Vec<TemplateNode>> {
    match &doctext.markup {
        None => Ok(vec![TemplateNode::Element(GenericElement::with_attrs(
            "code",
            vec![HtmlAttr::new("class", PRE_CLASSNAME)],
            vec![TemplateNode::Text(doctext.value.clone())],
        ))]),
        Some(lang) if is_weavemark_lang(lang) => {
            let document =
                host.preprocess(&doctext.value, &TransformContext::Summary(metadata))?;
            Ok(vec![TemplateNode::Block(Box::new(
                BlockTemplate::from_document(&document, host)?,
            ))])
        }
        Some(lang) => Err(RenderError::UnsupportedMarkup(lang.clone())),
    }
}

fn templatify_docstring(
    docstring: &Option<DocText>,
    host: &dyn TemplateHost,
    metadata: &SummaryMetadata,
) -> Result<Vec<TemplateNode>> {
    match docstring {
        Some(doctext) => templatify_doctext(doctext, host, metadata),
        None => Ok(Vec::new()),
    }
}

fn templatify_notes(
    notes: &[DocText],
    host: &dyn TemplateHost,
    metadata: &SummaryMetadata,
) -> Result<Vec<TemplateNode>> {
    let mut rendered = Vec::new();
    for note in notes {
        rendered.extend(templatify_doctext(note, host, metadata)?);
    }
    Ok(rendered)
}

/// Sort included namespace members by name and templatify each.
fn templatify_members(
    members: &[MemberSummary],
    host: &dyn TemplateHost,
) -> Result<Vec<TemplateNode>> {
    let mut included: Vec<&MemberSummary> = members
        .iter()
        .filter(|member| should_include(member.metadata()))
        .collect();
    included.sort_by(|a, b| a.name().cmp(b.name()));

    included
        .into_iter()
        .map(|member| match member {
            MemberSummary::Module(module) => Ok(TemplateNode::Module(Box::new(
                ModuleTemplate::from_summary(module, host)?,
            ))),
            MemberSummary::Class(class) => Ok(TemplateNode::Class(Box::new(
                ClassTemplate::from_summary(class, host)?,
            ))),
            MemberSummary::Callable(callable) => Ok(TemplateNode::Callable(Box::new(
                CallableTemplate::from_summary(callable, host)?,
            ))),
            MemberSummary::Variable(variable) => Ok(TemplateNode::Variable(Box::new(
                VariableTemplate::from_summary(variable, host)?,
            ))),
            MemberSummary::Crossref(crossref) => Ok(TemplateNode::Crossref(Box::new(
                CrossrefTemplate::from_summary(crossref)?,
            ))),
        })
        .collect()
}

/// Sorted export list rendered as list-item elements.
fn export_list(names: &[String]) -> Vec<GenericElement> {
    let mut sorted = names.to_vec();
    sorted.sort();
    sorted
        .into_iter()
        .map(|name| GenericElement::new("li", vec![TemplateNode::Text(name)]))
        .collect()
}

impl ModuleTemplate {
    /// Templatify a module summary.
    pub fn from_summary(summary: &ModuleSummary, host: &dyn TemplateHost) -> Result<Self> {
        let docstring = templatify_docstring(&summary.docstring, host, &summary.metadata)?;
        let exports = summary
            .exports
            .as_deref()
            .map(export_list)
            .unwrap_or_default();
        let members = templatify_members(&summary.members, host)?;
        let (plugin_attrs, plugin_widgets) =
            collect_summary_injections(host.plugin_manager(), SummaryRef::Module(summary));

        Ok(Self {
            name: summary.name.clone(),
            docstring,
            exports,
            members,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl ClassTemplate {
    /// Templatify a class summary.
    pub fn from_summary(summary: &ClassSummary, host: &dyn TemplateHost) -> Result<Self> {
        let metaclass = summary
            .metaclass
            .as_ref()
            .map(templatify_concrete_type)
            .transpose()?;
        let bases = summary
            .bases
            .iter()
            .map(templatify_concrete_type)
            .collect::<Result<Vec<_>>>()?;
        let docstring = templatify_docstring(&summary.docstring, host, &summary.metadata)?;
        let members = templatify_members(&summary.members, host)?;
        let (plugin_attrs, plugin_widgets) =
            collect_summary_injections(host.plugin_manager(), SummaryRef::Class(summary));

        Ok(Self {
            name: summary.name.clone(),
            metaclass,
            bases,
            docstring,
            members,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl CallableTemplate {
    /// Templatify a callable summary. Signatures sort by their explicit
    /// ordering index.
    pub fn from_summary(summary: &CallableSummary, host: &dyn TemplateHost) -> Result<Self> {
        let docstring = templatify_docstring(&summary.docstring, host, &summary.metadata)?;

        let mut included: Vec<&SignatureSummary> = summary
            .signatures
            .iter()
            .filter(|signature| should_include(&signature.metadata))
            .collect();
        included.sort_by_key(|signature| signature.ordering_index.unwrap_or(0));
        let signatures = included
            .into_iter()
            .map(|signature| SignatureTemplate::from_summary(signature, host))
            .collect::<Result<Vec<_>>>()?;

        let (plugin_attrs, plugin_widgets) =
            collect_summary_injections(host.plugin_manager(), SummaryRef::Callable(summary));

        Ok(Self {
            name: summary.name.clone(),
            docstring,
            color: summary.color,
            method_kind: summary.method_kind,
            is_generator: summary.is_generator,
            signatures,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl SignatureTemplate {
    /// Templatify one callable signature. Params sort by position.
    pub fn from_summary(summary: &SignatureSummary, host: &dyn TemplateHost) -> Result<Self> {
        let docstring = templatify_docstring(&summary.docstring, host, &summary.metadata)?;

        let mut included: Vec<&ParamSummary> = summary
            .params
            .iter()
            .filter(|param| should_include(&param.metadata))
            .collect();
        included.sort_by_key(|param| param.index);
        let params = included
            .into_iter()
            .map(|param| ParamTemplate::from_summary(param, host))
            .collect::<Result<Vec<_>>>()?;

        let retval = RetvalTemplate::from_summary(&summary.retval, host, &summary.metadata)?;
        let (plugin_attrs, plugin_widgets) =
            collect_summary_injections(host.plugin_manager(), SummaryRef::Signature(summary));

        Ok(Self {
            docstring,
            params,
            retval,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl ParamTemplate {
    /// Templatify a signature parameter.
    pub fn from_summary(summary: &ParamSummary, host: &dyn TemplateHost) -> Result<Self> {
        let notes = templatify_notes(&summary.notes, host, &summary.metadata)?;
        let typespec = summary
            .typespec
            .as_ref()
            .map(TypespecTemplate::from_typespec)
            .transpose()?;
        let (plugin_attrs, plugin_widgets) =
            collect_summary_injections(host.plugin_manager(), SummaryRef::Param(summary));

        Ok(Self {
            style: summary.style,
            name: summary.name.clone(),
            typespec,
            default: summary.default.clone(),
            notes,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl RetvalTemplate {
    /// Templatify a return value; uses the owning signature's metadata
    /// for nested doc text.
    pub fn from_summary(
        summary: &RetvalSummary,
        host: &dyn TemplateHost,
        metadata: &SummaryMetadata,
    ) -> Result<Self> {
        Ok(Self {
            typespec: summary
                .typespec
                .as_ref()
                .map(TypespecTemplate::from_typespec)
                .transpose()?,
            notes: templatify_notes(&summary.notes, host, metadata)?,
        })
    }
}

impl VariableTemplate {
    /// Templatify a variable summary.
    pub fn from_summary(summary: &VariableSummary, host: &dyn TemplateHost) -> Result<Self> {
        let (plugin_attrs, plugin_widgets) =
            collect_summary_injections(host.plugin_manager(), SummaryRef::Variable(summary));

        Ok(Self {
            name: summary.name.clone(),
            typespec: summary
                .typespec
                .as_ref()
                .map(TypespecTemplate::from_typespec)
                .transpose()?,
            notes: templatify_notes(&summary.notes, host, &summary.metadata)?,
            plugin_attrs,
            plugin_widgets,
        })
    }
}

impl TypespecTemplate {
    /// Templatify a typespec: the rendered type expression plus one tag
    /// per qualifier flag.
    pub fn from_typespec(spec: &TypeSpec) -> Result<Self> {
        let tags = vec![
            HtmlAttr::new("classvar", bool_text(spec.has_classvar)),
            HtmlAttr::new("final", bool_text(spec.has_final)),
        ];
        Ok(Self {
            normtype: Box::new(TemplateNode::Element(templatify_type_expr(
                &spec.normtype,
            )?)),
            tags,
        })
    }
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render a type expression into a generic-element tree.
pub fn templatify_type_expr(expr: &TypeExpr) -> Result<GenericElement> {
    Ok(match expr {
        TypeExpr::Concrete { primary, params } => GenericElement::new(
            "api-type-concrete",
            vec![
                TemplateNode::Crossref(Box::new(CrossrefTemplate::from_crossref(primary))),
                type_params_element(params)?,
            ],
        ),
        TypeExpr::EmptyGeneric { params } => {
            GenericElement::new("api-type-generic", vec![type_params_element(params)?])
        }
        TypeExpr::Union(alternatives) => GenericElement::new(
            "api-type-union",
            alternatives
                .iter()
                .map(|alt| templatify_type_expr(alt).map(TemplateNode::Element))
                .collect::<Result<Vec<_>>>()?,
        ),
        TypeExpr::Special(form) => GenericElement::new(
            "api-type-special",
            vec![TemplateNode::Crossref(Box::new(special_form_crossref(
                *form,
            )))],
        ),
        TypeExpr::Literal(values) => GenericElement::new(
            "api-type-literal",
            values
                .iter()
                .map(templatify_literal_value)
                .collect::<Result<Vec<_>>>()?,
        ),
    })
}

fn type_params_element(params: &[TypeExpr]) -> Result<TemplateNode> {
    Ok(TemplateNode::Element(GenericElement::new(
        "api-type-params",
        params
            .iter()
            .map(|param| templatify_type_expr(param).map(TemplateNode::Element))
            .collect::<Result<Vec<_>>>()?,
    )))
}

/// Fixed crossref rendering for builtin special forms.
fn special_form_crossref(form: SpecialForm) -> CrossrefTemplate {
    CrossrefTemplate {
        qualname: form.qualname().to_string(),
        traversals: None,
        target: CrossrefTarget::Text {
            shortname: form.shortname().to_string(),
            has_traversals: false,
        },
    }
}

/// Render one literal-type value.
///
/// Crossreffed literal values can only be enum members: they must name a
/// module and symbol and carry exactly one attribute traversal.
pub fn templatify_literal_value(value: &LiteralValue) -> Result<TemplateNode> {
    match value {
        LiteralValue::Crossref(crossref) => {
            if crossref.module.is_none() {
                return Err(RenderError::IncompleteCrossref("a module name"));
            }
            if crossref.symbol.is_none() {
                return Err(RenderError::IncompleteCrossref("a symbol name"));
            }
            let is_single_attr = matches!(
                crossref.traversals.as_slice(),
                [weavemark_ast::summary::Traversal::Attr(_)]
            );
            if !is_single_attr {
                return Err(RenderError::IncompleteCrossref(
                    "exactly one attribute traversal",
                ));
            }
            Ok(TemplateNode::Crossref(Box::new(
                CrossrefTemplate::from_crossref(crossref),
            )))
        }
        LiteralValue::Int(value) => Ok(literal_repr(value.to_string())),
        LiteralValue::Bool(value) => Ok(literal_repr(value.to_string())),
        LiteralValue::Str(value) => Ok(literal_repr(format!("{value:?}"))),
    }
}

fn literal_repr(repr: String) -> TemplateNode {
    TemplateNode::Element(GenericElement::with_attrs(
        "code",
        vec![HtmlAttr::new("class", PRE_CLASSNAME)],
        vec![TemplateNode::Text(repr)],
    ))
}

/// Require a concrete type expression (metaclass and base positions).
fn templatify_concrete_type(expr: &TypeExpr) -> Result<GenericElement> {
    match expr {
        TypeExpr::Concrete { .. } => templatify_type_expr(expr),
        _ => Err(RenderError::NonConcreteType),
    }
}

fn crossref_parts(crossref: &Crossref) -> (String, String, Option<String>) {
    let (shortname, qualname) = match (&crossref.module, &crossref.symbol) {
        (Some(module), Some(symbol)) => (symbol.clone(), format!("{module}:{symbol}")),
        (Some(module), None) => {
            let name = format!("<module {module}>");
            (name.clone(), name)
        }
        (None, Some(symbol)) => (symbol.clone(), symbol.clone()),
        (None, None) => ("<unknown>".to_string(), "<unknown>".to_string()),
    };

    let traversals = if crossref.traversals.is_empty() {
        None
    } else {
        Some(
            crossref
                .traversals
                .iter()
                .map(|traversal| traversal.flatten())
                .collect::<String>(),
        )
    };

    (shortname, qualname, traversals)
}

impl CrossrefTemplate {
    /// Templatify a crossref as plain text (no known link target).
    pub fn from_crossref(crossref: &Crossref) -> Self {
        let (shortname, qualname, traversals) = crossref_parts(crossref);
        let has_traversals = traversals.is_some();
        Self {
            qualname,
            traversals,
            target: CrossrefTarget::Text {
                shortname,
                has_traversals,
            },
        }
    }

    /// Templatify a crossref whose target location is known.
    ///
    /// The link text is built in the same pass, with `has_traversals`
    /// passed down; nothing is patched after construction.
    pub fn linked(crossref: &Crossref, href: impl Into<String>) -> Self {
        let (shortname, qualname, traversals) = crossref_parts(crossref);
        let has_traversals = traversals.is_some();
        Self {
            qualname,
            traversals,
            target: CrossrefTarget::Link {
                href: href.into(),
                shortname,
                has_traversals,
            },
        }
    }

    /// Templatify a crossref namespace member.
    pub fn from_summary(summary: &CrossrefSummary) -> Result<Self> {
        let crossref = summary
            .crossref
            .as_ref()
            .ok_or(RenderError::IncompleteCrossref("crossref data"))?;
        Ok(Self::from_crossref(crossref))
    }
}
