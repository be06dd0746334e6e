// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};
use crate::router::hash_href;
use crate::utils::ACTION_ATTR;
use crate::viewmodels::UiAction;

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Establecer inner HTML (solo para markup estático, p.ej. iconos SVG)
    pub fn html(self, html: &str) -> Self {
        self.element.set_inner_html(html);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Agregar varios hijos en orden
    pub fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Enlace interno bajo el fragmento (`#/path`)
    pub fn route(self, path: &str) -> Result<Self, JsValue> {
        self.attr("href", &hash_href(path))
    }

    /// Acción delegada que maneja el App
    pub fn action(self, action: UiAction) -> Result<Self, JsValue> {
        self.attr(ACTION_ATTR, action.as_str())
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}
