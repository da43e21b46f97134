//! The `twig` view set.
//!
//! Twig shares its delimiters with tera, so literal Twig markup is wrapped in
//! `raw` blocks and only the generated parts are interpolated.

pub static FORM_VIEW: &str = r#"{% raw %}{{ use('yii/widgets/ActiveForm') }}{% endraw %}
<div class="{{ css_id }}-form">

    {% raw %}{% set form = active_form_begin() %}{% endraw %}
{%- for field in form_fields %}

    {{ field }}
{%- endfor %}

    <div class="form-group">
        {% raw %}{{ html.submitButton('Save', {'class': 'btn btn-success'}) | raw }}{% endraw %}
    </div>

    {% raw %}{{ active_form_end() }}{% endraw %}

</div>
"#;

pub static SEARCH_VIEW: &str = r#"{% raw %}{{ use('yii/widgets/ActiveForm') }}{% endraw %}
<div class="{{ css_id }}-search">

    {% raw %}{% set form = active_form_begin({'action': ['index'], 'method': 'get'}) %}{% endraw %}
{%- for field in search_fields %}

    {{ field }}
{%- endfor %}

    <div class="form-group">
        {% raw %}{{ html.submitButton('Search', {'class': 'btn btn-primary'}) | raw }}
        {{ html.resetButton('Reset', {'class': 'btn btn-default'}) | raw }}{% endraw %}
    </div>

    {% raw %}{{ active_form_end() }}{% endraw %}

</div>
"#;

pub static CREATE_VIEW: &str = r#"{% raw %}{{ set(this, 'title', '{% endraw %}Create {{ model_title }}{% raw %}') }}{% endraw %}
<div class="{{ css_id }}-create">

    <h1>{% raw %}{{ html.encode(this.title) }}{% endraw %}</h1>

    {% raw %}{{ this.render('_form.twig', {'model': model}) | raw }}{% endraw %}

</div>
"#;

pub static INDEX_VIEW: &str = r#"{% raw %}{{ use('yii/grid/GridView') }}
{{ set(this, 'title', '{% endraw %}{{ model_title_plural }}{% raw %}') }}{% endraw %}
<div class="{{ css_id }}-index">

    <h1>{% raw %}{{ html.encode(this.title) }}{% endraw %}</h1>
{%- if search_model_class %}
    {% raw %}{# {{ this.render('_search.twig', {'model': searchModel}) | raw }} #}{% endraw %}
{%- endif %}

    <p>
        {% raw %}{{ html.a('{% endraw %}Create {{ model_title }}{% raw %}', path('{% endraw %}{{ controller_id }}{% raw %}/create'), {'class': 'btn btn-success'}) | raw }}{% endraw %}
    </p>

    {% raw %}{{ grid_view_widget({
        'dataProvider': dataProvider,{% endraw %}
{%- if search_model_class %}
        'filterModel': searchModel,
{%- endif %}
        'columns': [
            {'class': 'yii\\grid\\SerialColumn'},
{%- for column in grid_columns %}{% if column.active %}
            {{ column.code }},{% endif %}
{%- endfor %}

            {'class': 'yii\\grid\\ActionColumn'},
        ],
    {% raw %}}) }}{% endraw %}
</div>
"#;

pub static UPDATE_VIEW: &str = r#"{% raw %}{{ set(this, 'title', 'Update {% endraw %}{{ model_title }}{% raw %}: ' ~ {% endraw %}{{ name_access }}{% raw %}) }}{% endraw %}
<div class="{{ css_id }}-update">

    <h1>{% raw %}{{ html.encode(this.title) }}{% endraw %}</h1>

    {% raw %}{{ this.render('_form.twig', {'model': model}) | raw }}{% endraw %}

</div>
"#;

pub static VIEW_VIEW: &str = r#"{% raw %}{{ use('yii/widgets/DetailView') }}
{{ set(this, 'title', {% endraw %}{{ name_access }}{% raw %}) }}{% endraw %}
<div class="{{ css_id }}-view">

    <h1>{% raw %}{{ html.encode(this.title) }}{% endraw %}</h1>

    <p>
        {% raw %}{{ html.a('Update', path('{% endraw %}{{ controller_id }}/update', { {{ url_params }} }{% raw %}), {'class': 'btn btn-primary'}) | raw }}{% endraw %}
        {% raw %}{{ html.a('Delete', path('{% endraw %}{{ controller_id }}/delete', { {{ url_params }} }{% raw %}), {
            'class': 'btn btn-danger',
            'data': {
                'confirm': 'Are you sure you want to delete this item?',
                'method': 'post',
            },
        }) | raw }}{% endraw %}
    </p>

    {% raw %}{{ detail_view_widget({
        'model': model,
        'attributes': [{% endraw %}
{%- for attribute in detail_attributes %}
            {{ attribute }},
{%- endfor %}
        {% raw %}],
    }) }}{% endraw %}

</div>
"#;
