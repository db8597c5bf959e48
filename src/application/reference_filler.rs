// Reference filler - Replaces name lists with converged instances
use crate::application::convergence::converge;
use crate::domain::error::TemplateError;
use crate::domain::registry::Registry;
use crate::domain::template::{Instance, ReferenceList, Template};

/// Return a copy of `object` whose reference attribute selected by `field`
/// holds converged instances from `registry`, in the original name order.
///
/// An attribute that is absent or already resolved is left untouched, so
/// filling the same attribute twice is harmless.
pub fn fill<P, T>(
    object: &P,
    field: impl Fn(&mut P) -> &mut Option<ReferenceList<T>>,
    registry: &Registry<T>,
) -> Result<P, TemplateError>
where
    P: Clone,
    T: Template,
{
    let mut filled = object.clone();
    let slot = field(&mut filled);

    if let Some(ReferenceList::Unresolved(names)) = &*slot {
        let instances = instantiate(names, registry)?;
        tracing::debug!("filled {} {} reference(s)", instances.len(), T::KIND);
        *slot = Some(ReferenceList::Resolved(instances));
    }

    Ok(filled)
}

fn instantiate<T: Template>(
    names: &[String],
    registry: &Registry<T>,
) -> Result<Vec<Instance<T>>, TemplateError> {
    names
        .iter()
        .map(|name| {
            Ok(Instance {
                name: name.clone(),
                template: converge(name, registry)?,
            })
        })
        .collect()
}
